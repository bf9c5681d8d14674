//! Runtime options for a [`ShopSystem`](super::ShopSystem).

use crate::order_manager::TransitionPolicy;
use serde::Deserialize;

/// Shop configuration. Every field has a default, so `{}` is a valid document.
///
/// ```rust
/// use shop_recipe::lifecycle::ShopConfig;
/// use shop_recipe::order_manager::TransitionPolicy;
///
/// let config: ShopConfig = serde_json::from_str(r#"{ "transition_policy": "lifecycle" }"#).unwrap();
/// assert_eq!(config.transition_policy, TransitionPolicy::Lifecycle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopConfig {
    /// Which order status changes are accepted. Defaults to `permissive`.
    pub transition_policy: TransitionPolicy,
}
