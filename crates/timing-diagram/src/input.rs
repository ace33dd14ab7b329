use crate::payment::Payment;
use crate::payment::PaymentList;
use crate::Error;
use crate::Result;
use serde::Deserialize;
use std::io::Read;

/// The two documents the node prints: `listpayments` or a single payment from `payinvoice`.
#[derive(Clone, Debug)]
pub enum PaymentsInput {
    List(PaymentList),
    Single(Payment),
}

impl PaymentsInput {
    /// Decodes the first JSON value of `reader`. Anything after it is ignored.
    ///
    /// An object with a `payments` field is a payment list, anything else has to be a payment.
    pub fn decode<R: Read>(reader: R) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        let value = serde_json::Value::deserialize(&mut deserializer)
            .map_err(Error::from_decoder)?;

        let input = if value.get("payments").is_some() {
            PaymentsInput::List(serde_json::from_value(value)?)
        } else {
            PaymentsInput::Single(serde_json::from_value(value)?)
        };

        Ok(input)
    }

    /// Picks the payment to draw.
    ///
    /// With a hash, the first payment with exactly that `payment_hash` is taken. Without one, a
    /// single payment is taken as is and a list must hold exactly one payment.
    pub fn select(self, payment_hash: Option<&str>) -> Result<Payment> {
        let payment = match (self, payment_hash) {
            (PaymentsInput::List(list), Some(hash)) => list
                .payments
                .into_iter()
                .find(|payment| payment.payment_hash == hash)
                .ok_or_else(|| Error::PaymentNotFound(hash.to_string()))?,
            (PaymentsInput::List(mut list), None) => {
                if list.payments.len() != 1 {
                    return Err(Error::AmbiguousPayment(list.payments.len()));
                }
                list.payments.remove(0)
            }
            (PaymentsInput::Single(payment), Some(hash)) if payment.payment_hash != hash => {
                return Err(Error::PaymentNotFound(hash.to_string()));
            }
            (PaymentsInput::Single(payment), _) => payment,
        };

        tracing::debug!(
            payment_hash = %payment.payment_hash,
            htlcs = payment.htlcs.len(),
            "Selected payment"
        );

        Ok(payment)
    }
}
