use crate::{
  entity::transaction::{self, PaymentMethod, TxnStatus},
  plans::Plan,
  prelude::*,
  sv,
};

pub struct Payment<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Payment<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Records a purchase attempt for a registered user and flips them to paid.
  /// Fails on an unknown plan id or an unregistered payer before any write,
  /// so a rejected attempt leaves no transaction behind.
  pub async fn process(
    &self,
    user_id: &str,
    plan_id: &str,
    method: PaymentMethod,
  ) -> Result<transaction::Model> {
    let plan = Plan::by_id(plan_id).ok_or(Error::PlanNotFound)?;

    let users = sv::User::new(self.db);
    users.get(user_id).await?;

    let now = Utc::now();
    let id = format!("TXN_{}_{}", now.timestamp_millis(), user_id);

    let mut record = transaction::ActiveModel {
      id: Set(id),
      user_id: Set(user_id.to_string()),
      plan_id: Set(plan_id.to_string()),
      amount: Set(plan.price),
      currency: Set(plan.currency.to_string()),
      status: Set(TxnStatus::Pending),
      timestamp: Set(now.naive_utc()),
      payment_method: Set(method),
    };

    // TODO: hand off to Stripe/PayPal and wait for provider confirmation
    record.status = Set(TxnStatus::Completed);

    let record = record.insert(self.db).await?;

    users.mark_as_paid(user_id, plan.billing_period).await?;

    Ok(record)
  }

  /// A transaction verifies iff it exists and reached `completed`.
  /// Unknown ids are not an error here, mirroring the checkout flow.
  pub async fn verify(&self, txn_id: &str) -> Result<bool> {
    let record = self.by_id(txn_id).await?;
    Ok(record.is_some_and(|txn| txn.status == TxnStatus::Completed))
  }

  pub async fn by_id(&self, txn_id: &str) -> Result<Option<transaction::Model>> {
    let record = transaction::Entity::find_by_id(txn_id).one(self.db).await?;
    Ok(record)
  }

  pub async fn by_user(&self, user_id: &str) -> Result<Vec<transaction::Model>> {
    let records = transaction::Entity::find()
      .filter(transaction::Column::UserId.eq(user_id))
      .order_by_asc(transaction::Column::Timestamp)
      .all(self.db)
      .await?;
    Ok(records)
  }
}

#[cfg(test)]
mod tests {
  use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};

  use super::*;
  use crate::entity::*;

  async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    let schema = Schema::new(DbBackend::Sqlite);

    let stmt = schema.create_table_from_entity(user::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(subscription::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(transaction::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  async fn register(db: &DatabaseConnection, user_id: &str) {
    sv::User::new(db)
      .register(Some(user_id.into()), None, None)
      .await
      .unwrap();
  }

  #[tokio::test]
  async fn test_unregistered_payer_leaves_no_record() {
    // Deployed schema, not the entity-derived one.
    let db = Database::connect("sqlite::memory:").await.unwrap();
    crate::migration::Migrator::up(&db, None).await.unwrap();

    let sv = Payment::new(&db);

    let result = sv.process("ghost", "monthly", PaymentMethod::Card).await;
    assert!(matches!(result, Err(Error::UserNotFound)));

    assert!(sv.by_user("ghost").await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_unknown_plan_fails() {
    let db = setup_test_db().await;
    register(&db, "user_1").await;

    let result = Payment::new(&db)
      .process("user_1", "lifetime", PaymentMethod::Card)
      .await;

    assert!(matches!(result, Err(Error::PlanNotFound)));
  }

  #[tokio::test]
  async fn test_process_completes_and_marks_paid() {
    let db = setup_test_db().await;
    register(&db, "user_1").await;

    let txn = Payment::new(&db)
      .process("user_1", "monthly", PaymentMethod::Stripe)
      .await
      .unwrap();

    assert!(txn.id.starts_with("TXN_"));
    assert_eq!(txn.amount, 9.99);
    assert_eq!(txn.currency, "USD");
    assert_eq!(txn.status, TxnStatus::Completed);
    assert_eq!(txn.payment_method, PaymentMethod::Stripe);

    let user = sv::User::new(&db).get("user_1").await.unwrap();
    assert!(user.is_paid);

    let sub = sv::User::new(&db).subscription("user_1").await.unwrap().unwrap();
    assert_eq!(sub.plan, subscription::BillingPeriod::Monthly);
  }

  #[tokio::test]
  async fn test_transaction_round_trip() {
    let db = setup_test_db().await;
    register(&db, "user_1").await;
    let sv = Payment::new(&db);

    let txn =
      sv.process("user_1", "yearly", PaymentMethod::Paypal).await.unwrap();
    let loaded = sv.by_id(&txn.id).await.unwrap().unwrap();

    assert_eq!(loaded, txn);
  }

  #[tokio::test]
  async fn test_verify() {
    let db = setup_test_db().await;
    register(&db, "user_1").await;
    let sv = Payment::new(&db);

    let txn =
      sv.process("user_1", "monthly", PaymentMethod::Card).await.unwrap();

    assert!(sv.verify(&txn.id).await.unwrap());
    assert!(!sv.verify("TXN_0_ghost").await.unwrap());
  }

  #[tokio::test]
  async fn test_by_user_filters() {
    let db = setup_test_db().await;
    register(&db, "user_1").await;
    register(&db, "user_2").await;
    let sv = Payment::new(&db);

    sv.process("user_1", "monthly", PaymentMethod::Card).await.unwrap();
    sv.process("user_2", "yearly", PaymentMethod::Card).await.unwrap();

    let txns = sv.by_user("user_1").await.unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].user_id, "user_1");
    assert_eq!(txns[0].plan_id, "monthly");
  }
}
