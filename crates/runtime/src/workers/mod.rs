//! Background tasks that back the runtime orchestration.

mod rewards;

pub(crate) use rewards::RewardDispatcher;
