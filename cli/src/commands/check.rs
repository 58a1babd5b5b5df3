use netforms_core::{AddressInput, FieldConfig, FormField};
use tracing::{debug, error, info, warn};

use crate::commands::CheckArgs;

/// Cleans `args.value` with `field`, logging the outcome. Returns whether it was accepted.
pub fn check<F>(label: &str, field: &F, args: CheckArgs) -> bool
where
    F: FormField,
{
    let input: AddressInput<F::Value> = args.value.into();

    match field.clean(input) {
        Ok(Some(value)) => {
            info!(field = label, "{value}");
            true
        }
        Ok(None) => {
            warn!(field = label, "no value");
            true
        }
        Err(err) => {
            debug!(field = label, kind = ?err.kind(), code = ?err.code(), "rejected");
            error!(field = label, "{err}");
            false
        }
    }
}

pub fn config(args: &CheckArgs) -> FieldConfig {
    FieldConfig {
        required: args.required,
        ..FieldConfig::default()
    }
}
