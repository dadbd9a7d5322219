//! User entity - registered learners and their trial window

use chrono::{NaiveDateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

const DAY_MS: i64 = 86_400_000;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub user_id: String,
  pub email: String,
  pub name: Option<String>,
  pub reg_date: NaiveDateTime,
  pub trial_ends_at: NaiveDateTime,
  pub is_paid: bool,
}

impl Model {
  /// Paid users always have access; everyone else only until the trial ends.
  pub fn trial_active(&self) -> bool {
    self.is_paid || Utc::now().naive_utc() < self.trial_ends_at
  }

  /// Remaining trial days, rounded up. `None` means unlimited (paid user).
  /// Goes negative once the trial has expired.
  pub fn remaining_trial_days(&self) -> Option<i64> {
    if self.is_paid {
      return None;
    }
    let ms = (self.trial_ends_at - Utc::now().naive_utc()).num_milliseconds();
    Some(ms.div_euclid(DAY_MS) + i64::from(ms.rem_euclid(DAY_MS) > 0))
  }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_one = "super::subscription::Entity")]
  Subscription,
  #[sea_orm(has_many = "super::transaction::Entity")]
  Transactions,
}

impl Related<super::subscription::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Subscription.def()
  }
}

impl Related<super::transaction::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Transactions.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
