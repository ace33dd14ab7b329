use proptest::prelude::*;
use timing_diagram::diagram::AXIS_WIDTH_PX;
use timing_diagram::diagram::BarColor;
use timing_diagram::payment::Failure;
use timing_diagram::payment::Hop;
use timing_diagram::payment::Htlc;
use timing_diagram::payment::HtlcStatus;
use timing_diagram::payment::Payment;
use timing_diagram::payment::Route;
use timing_diagram::Diagram;

const T0: i64 = 1_700_000_000_000_000_000;

fn arb_status() -> impl Strategy<Value = (HtlcStatus, Option<Failure>)> {
    prop_oneof![
        Just((HtlcStatus::Succeeded, None)),
        Just((HtlcStatus::InFlight, None)),
        prop_oneof![
            Just("MPP_TIMEOUT"),
            Just("TEMPORARY_CHANNEL_FAILURE"),
            Just("INCORRECT_OR_UNKNOWN_PAYMENT_DETAILS")
        ]
        .prop_map(|code| {
            (
                HtlcStatus::Failed,
                Some(Failure {
                    code: code.to_string(),
                    failure_source_index: 1,
                }),
            )
        }),
    ]
}

prop_compose! {
    fn arb_htlc()(
        attempt_offset in 0i64..60_000_000_000,
        duration in 0i64..120_000_000_000,
        resolved in any::<bool>(),
        (status, failure) in arb_status(),
        chan_id in 1u64..4,
        delivered in 1i64..10_000_000,
    ) -> Htlc {
        let attempt_time_ns = T0 + attempt_offset;
        Htlc {
            route: Route {
                hops: vec![
                    Hop { pub_key: format!("{chan_id:06}ab"), chan_id, amt_to_forward: delivered + 1 },
                    Hop { pub_key: "fedcba9876".to_string(), chan_id: 99, amt_to_forward: delivered },
                ],
                total_amt: delivered + 2,
            },
            attempt_time_ns,
            resolve_time_ns: if resolved { attempt_time_ns + duration } else { 0 },
            status,
            failure,
        }
    }
}

prop_compose! {
    fn arb_payment()(first in arb_htlc(), rest in prop::collection::vec(arb_htlc(), 0..8)) -> Payment {
        // the node lists the earliest attempt first
        let resolve_time_ns = match first.resolve_time_ns() {
            Some(resolve) => T0 + (resolve - first.attempt_time_ns),
            None => 0,
        };
        let mut htlcs = vec![Htlc { attempt_time_ns: T0, resolve_time_ns, ..first }];
        htlcs.extend(rest);

        Payment { payment_hash: "aa".to_string(), htlcs }
    }
}

proptest! {
    #[test]
    fn first_bar_starts_at_zero_and_resolved_bars_fit_the_axis(payment in arb_payment()) {
        let diagram = Diagram::build(&payment).unwrap();

        prop_assert_eq!(diagram.bars[0].start_px, 0);
        for (bar, htlc) in diagram.bars.iter().zip(&payment.htlcs) {
            prop_assert!(bar.start_px >= 0);
            prop_assert!(bar.width_px() >= 0);
            if htlc.resolve_time_ns().is_some() {
                prop_assert!(bar.end_px <= AXIS_WIDTH_PX);
            }
        }
    }

    #[test]
    fn one_bar_per_htlc_colored_by_status(payment in arb_payment()) {
        let diagram = Diagram::build(&payment).unwrap();

        prop_assert_eq!(diagram.bars.len(), payment.htlcs.len());
        for (bar, htlc) in diagram.bars.iter().zip(&payment.htlcs) {
            let expected = match htlc.status {
                HtlcStatus::Succeeded => BarColor::Green,
                HtlcStatus::Failed => BarColor::Red,
                HtlcStatus::InFlight => BarColor::Grey,
            };
            prop_assert_eq!(bar.color, expected);
            let prefix = format!("{} sat (", htlc.route.total_amt);
            prop_assert!(bar.label.starts_with(&prefix), "label {}", bar.label);

            let suffix = match &htlc.failure {
                Some(failure) => format!(": {} @ 1", failure.code),
                None => ")".to_string(),
            };
            prop_assert!(bar.label.ends_with(&suffix), "label {}", bar.label);
        }
    }

    #[test]
    fn total_settled_is_sum_of_delivered_amounts(payment in arb_payment()) {
        let diagram = Diagram::build(&payment).unwrap();

        let expected: i64 = payment
            .htlcs
            .iter()
            .filter(|htlc| {
                htlc.status == HtlcStatus::Succeeded
                    || htlc.failure.as_ref().map(|f| f.code == "MPP_TIMEOUT").unwrap_or(false)
            })
            .map(|htlc| htlc.route.hops.last().unwrap().amt_to_forward)
            .sum();

        prop_assert_eq!(diagram.settlement.total(), expected);
        prop_assert_eq!(diagram.settlement.routes().map(|(_, amt)| amt).sum::<i64>(), expected);
    }
}
