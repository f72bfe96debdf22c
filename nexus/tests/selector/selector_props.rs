use nexus::{ProviderMode, ProviderSelector};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Mode(bool),
    Configure(String, String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Mode),
        ("[a-z]{0,8}", "[a-z0-9]{0,8}")
            .prop_map(|(host, key)| Op::Configure(format!("http://{host}:8000"), key)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn selector_state_follows_last_operation(ops in prop::collection::vec(op(), 0..24)) {
        let mut selector = ProviderSelector::default();
        let mut expected_mode = ProviderMode::Demo;
        let mut expected_config = selector.config().clone();
        let mut configures = 0u64;

        for op in ops {
            match op {
                Op::Mode(live) => {
                    expected_mode = if live { ProviderMode::Live } else { ProviderMode::Demo };
                    selector.set_mode(expected_mode);
                }
                Op::Configure(url, key) => {
                    expected_config = nexus::ProviderConfig::new(url.clone(), key.clone());
                    configures += 1;
                    selector.configure_live(url, key);
                }
            }
        }

        prop_assert_eq!(selector.mode(), expected_mode);
        prop_assert_eq!(selector.config(), &expected_config);
        prop_assert_eq!(selector.config_generation(), configures);
        let expected_name = match expected_mode {
            ProviderMode::Demo => "nexus-static",
            ProviderMode::Live => "nexus-live",
        };
        prop_assert_eq!(selector.active_provider().name(), expected_name);
    }
}
