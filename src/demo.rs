use crate::concat::normal_concat;
use crate::config::DemoConfig;
use crate::error::Result;
use crate::multiplier::{Multiplier, OverflowPolicy};
use crate::version;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub preamble: String,
    pub description: String,
    pub product: i64,
    pub concatenation: String,
}

/// Runs the demo sequence: banner, one multiplication, one library call.
pub fn run(inputs: &DemoConfig, policy: OverflowPolicy) -> Result<DemoReport> {
    let preamble = version::preamble();
    info!("{preamble}");
    info!("{}", version::description());

    let mut multiplier = Multiplier::new();
    multiplier.multiply_with(inputs.lhs, inputs.rhs, policy)?;
    info!(%policy, "{}", multiplier.result());

    let concatenation = normal_concat(&inputs.left, &inputs.right);
    info!("Library call result: {concatenation}");

    Ok(DemoReport {
        preamble,
        description: version::description().to_string(),
        product: multiplier.result(),
        concatenation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_inputs_reproduce_the_classic_demo() {
        let report = run(&DemoConfig::default(), OverflowPolicy::Wrap).unwrap();
        assert_eq!(report.product, 12);
        assert_eq!(report.concatenation, "hello world");
        assert_eq!(report.preamble, version::preamble());
    }

    #[test]
    fn custom_inputs_flow_through() {
        let inputs = DemoConfig {
            lhs: 100_000,
            rhs: 200_000,
            left: "foo".into(),
            right: "bar".into(),
        };
        let report = run(&inputs, OverflowPolicy::Check).unwrap();
        assert_eq!(report.product, 20_000_000_000);
        assert_eq!(report.concatenation, "foobar");
    }

    #[test]
    fn checked_policy_surfaces_overflow() {
        let inputs = DemoConfig {
            lhs: i64::MIN,
            rhs: -1,
            ..DemoConfig::default()
        };
        let err = run(&inputs, OverflowPolicy::Check).unwrap_err();
        assert!(matches!(err, Error::Overflow { .. }));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = run(&DemoConfig::default(), OverflowPolicy::Wrap).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["product"], 12);
        assert_eq!(json["concatenation"], "hello world");
    }
}
