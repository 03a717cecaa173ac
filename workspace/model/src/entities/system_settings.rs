use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Primary key of the one and only settings row.
pub const SETTINGS_ROW_ID: i32 = 1;

/// Billing tariffs edited from the system settings screen. The table holds a
/// single row keyed by [`SETTINGS_ROW_ID`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "system_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Price per unit of water.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub water_rate: Decimal,
    /// Price per unit of electricity.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub electricity_rate: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub late_fee: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub deposit_rate: Decimal,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
