pub mod error;
pub mod models;
pub mod settings;

use std::sync::Arc;

use derive_more::Constructor;
use log::debug;

use super::integer_service::IntegerService;

use self::error::{DiceServiceError, Result};
use self::models::{DiceRollModel, SortOrder};
use self::settings::DiceSettings;

pub trait DiceService: Send + Sync {
    ///
    /// Rolls `count` dice with `sides` sides each. `results` keeps draw
    /// order unless `order` is given. Any generator failure aborts the
    /// whole roll.
    ///
    fn roll(&self, count: i64, sides: i64, order: Option<SortOrder>) -> Result<DiceRollModel>;
}

#[derive(Clone, Constructor)]
pub struct CoreDiceService {
    integer_service: Arc<dyn IntegerService>,
    settings: DiceSettings,
}

impl DiceService for CoreDiceService {
    fn roll(&self, count: i64, sides: i64, order: Option<SortOrder>) -> Result<DiceRollModel> {
        let capacity = self.validate(count, sides)?;

        let mut results = Vec::with_capacity(capacity);
        let mut total: i128 = 0;
        for _ in 0..count {
            let res = self.integer_service.generate(1, sides)?;
            total += i128::from(res);
            results.push(res);
        }

        match order {
            Some(SortOrder::Ascending) => results.sort_unstable(),
            Some(SortOrder::Descending) => results.sort_unstable_by(|a, b| b.cmp(a)),
            None => {}
        }

        debug!("Rolled {count}d{sides} for a total of {total}");
        Ok(DiceRollModel::new(total, count, results))
    }
}

impl CoreDiceService {
    ///
    /// Checks `count` and `sides` against each other and the settings,
    /// returning the number of results to allocate for
    ///
    fn validate(&self, count: i64, sides: i64) -> Result<usize> {
        if count < 0 {
            return Err(DiceServiceError::InvalidArgument(format!(
                "dice count {count} is negative"
            )));
        }
        if sides < 1 {
            return Err(DiceServiceError::InvalidArgument(format!(
                "dice must have at least 1 side, got {sides}"
            )));
        }
        if count > self.settings.max_dice {
            return Err(DiceServiceError::InvalidArgument(format!(
                "dice count {count} exceeds the limit of {}",
                self.settings.max_dice
            )));
        }
        if sides > self.settings.max_sides {
            return Err(DiceServiceError::InvalidArgument(format!(
                "{sides} sides exceeds the limit of {}",
                self.settings.max_sides
            )));
        }

        usize::try_from(count).map_err(|_| {
            DiceServiceError::InvalidArgument(format!("dice count {count} is too large"))
        })
    }
}
