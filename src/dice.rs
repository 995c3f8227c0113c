use std::sync::Arc;

use crate::byte_source::OsByteSource;
use crate::services::dice_service::{
    error::Result as DiceResult,
    models::{DiceRollModel, SortOrder},
    settings::DiceSettings,
    CoreDiceService, DiceService,
};
use crate::services::integer_service::{self, error::Result as IntegerResult, CoreIntegerService};

///
/// Uniformly random integer in `[min, max]`, drawn from the OS CSPRNG
///
pub fn generate(min: i64, max: i64) -> IntegerResult<i64> {
    integer_service::generate(min, max, &OsByteSource)
}

///
/// Rolls `count` dice with `sides` sides against the OS CSPRNG, with the
/// default `DiceSettings` limits
///
pub fn roll(count: i64, sides: i64, order: Option<SortOrder>) -> DiceResult<DiceRollModel> {
    let integer_service = Arc::new(CoreIntegerService::new(Arc::new(OsByteSource)));
    CoreDiceService::new(integer_service, DiceSettings::default()).roll(count, sides, order)
}
