//! Timing diagrams of Lightning payments.
//!
//! Reads what the node prints for `listpayments` or `payinvoice` and draws one bar per HTLC
//! attempt, from the moment it was sent until it resolved.
//!
//! ```text
//! lncli listpayments | timing-diagram <payment_hash> > out.html
//! lncli payinvoice <payreq> | timing-diagram > out.html
//! ```

pub mod cli;
pub mod diagram;
mod error;
pub mod html;
pub mod input;
pub mod payment;

pub use diagram::Diagram;
pub use error::Error;
pub use error::Result;
pub use input::PaymentsInput;

use std::io::Read;

/// Decodes the node output from `reader` and renders the diagram of the selected payment.
pub fn run<R: Read>(reader: R, payment_hash: Option<&str>) -> Result<String> {
    let payment = PaymentsInput::decode(reader)?.select(payment_hash)?;
    let diagram = Diagram::build(&payment)?;

    Ok(html::render(&diagram))
}
