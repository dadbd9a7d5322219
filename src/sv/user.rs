use crate::{
  entity::{
    subscription::{self, BillingPeriod},
    user,
  },
  prelude::*,
};

/// Free-access window granted on registration.
pub const TRIAL_DAYS: i64 = 7;

pub struct User<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> User<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Registers a learner with a trial ending exactly [`TRIAL_DAYS`] from now.
  /// Missing ids and emails get timestamp-derived guest values.
  pub async fn register(
    &self,
    user_id: Option<String>,
    email: Option<String>,
    name: Option<String>,
  ) -> Result<user::Model> {
    let now = Utc::now();
    let millis = now.timestamp_millis();

    let user_id = user_id.unwrap_or_else(|| format!("user_{millis}"));
    let email = email.unwrap_or_else(|| format!("guest_{millis}@gargaar.local"));

    // Re-registering must not restart the trial window.
    if self.by_id(&user_id).await?.is_some() {
      return Err(Error::UserExists);
    }

    let now = now.naive_utc();
    let user = user::ActiveModel {
      user_id: Set(user_id),
      email: Set(email),
      name: Set(name),
      reg_date: Set(now),
      trial_ends_at: Set(now + TimeDelta::days(TRIAL_DAYS)),
      is_paid: Set(false),
    };

    Ok(user.insert(self.db).await?)
  }

  pub async fn by_id(&self, user_id: &str) -> Result<Option<user::Model>> {
    let user = user::Entity::find_by_id(user_id).one(self.db).await?;
    Ok(user)
  }

  pub async fn get(&self, user_id: &str) -> Result<user::Model> {
    self.by_id(user_id).await?.ok_or(Error::UserNotFound)
  }

  pub async fn subscription(
    &self,
    user_id: &str,
  ) -> Result<Option<subscription::Model>> {
    let sub = subscription::Entity::find_by_id(user_id).one(self.db).await?;
    Ok(sub)
  }

  /// Flips the user to paid and replaces any previous subscription wholesale.
  /// Renewal lands `plan.renewal_days()` after the call.
  pub async fn mark_as_paid(
    &self,
    user_id: &str,
    plan: BillingPeriod,
  ) -> Result<subscription::Model> {
    let txn = self.db.begin().await?;

    let user = user::Entity::find_by_id(user_id)
      .one(&txn)
      .await?
      .ok_or(Error::UserNotFound)?;

    let now = Utc::now().naive_utc();

    user::ActiveModel { is_paid: Set(true), ..user.into() }.update(&txn).await?;

    subscription::Entity::delete_by_id(user_id).exec(&txn).await?;

    let sub = subscription::ActiveModel {
      user_id: Set(user_id.to_string()),
      plan: Set(plan),
      started_at: Set(now),
      renews_at: Set(now + TimeDelta::days(plan.renewal_days())),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(sub)
  }
}
