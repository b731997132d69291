use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub transaction_ref: String,
    pub customer_name: String,
    pub contact_number: String,
    pub customer_address: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub total_amount: f64,
    #[sea_orm(column_type = "Double")]
    pub downpayment: f64,
    #[sea_orm(column_type = "Double")]
    pub balance: f64,
    pub payment_status: String,
    pub booking_type: String,
    pub booking_status: String,
    pub proof_of_payment: Option<String>,
    pub user_id: Option<i32>,
    pub extension_history: Option<Json>,
    pub version: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
