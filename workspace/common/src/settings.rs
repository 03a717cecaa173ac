use crate::UnknownName;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Billing tariffs. Amounts travel as decimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    /// Price per unit of water
    pub water_rate: Decimal,
    /// Price per unit of electricity
    pub electricity_rate: Decimal,
    /// Flat fee charged on late payment
    pub late_fee: Decimal,
    /// Deposit required on move-in
    pub deposit_rate: Decimal,
}

impl Default for SystemSettings {
    /// Values shown before the stored record has been loaded.
    fn default() -> Self {
        Self {
            water_rate: Decimal::new(18, 0),
            electricity_rate: Decimal::new(8, 0),
            late_fee: Decimal::new(100, 0),
            deposit_rate: Decimal::new(3000, 0),
        }
    }
}

impl SystemSettings {
    pub fn get(&self, field: TariffField) -> Decimal {
        match field {
            TariffField::WaterRate => self.water_rate,
            TariffField::ElectricityRate => self.electricity_rate,
            TariffField::LateFee => self.late_fee,
            TariffField::DepositRate => self.deposit_rate,
        }
    }

    pub fn set(&mut self, field: TariffField, value: Decimal) {
        match field {
            TariffField::WaterRate => self.water_rate = value,
            TariffField::ElectricityRate => self.electricity_rate = value,
            TariffField::LateFee => self.late_fee = value,
            TariffField::DepositRate => self.deposit_rate = value,
        }
    }
}

/// One editable tariff on the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum TariffField {
    WaterRate,
    ElectricityRate,
    LateFee,
    DepositRate,
}

impl TariffField {
    pub const ALL: [TariffField; 4] = [
        TariffField::WaterRate,
        TariffField::ElectricityRate,
        TariffField::LateFee,
        TariffField::DepositRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TariffField::WaterRate => "waterRate",
            TariffField::ElectricityRate => "electricityRate",
            TariffField::LateFee => "lateFee",
            TariffField::DepositRate => "depositRate",
        }
    }
}

impl fmt::Display for TariffField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TariffField {
    type Err = UnknownName;

    /// Accepts both the form ids (`waterRate`) and column names (`water_rate`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waterRate" | "water_rate" => Ok(TariffField::WaterRate),
            "electricityRate" | "electricity_rate" => Ok(TariffField::ElectricityRate),
            "lateFee" | "late_fee" => Ok(TariffField::LateFee),
            "depositRate" | "deposit_rate" => Ok(TariffField::DepositRate),
            _ => Err(UnknownName::new("tariff field", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!("waterRate".parse::<TariffField>(), Ok(TariffField::WaterRate));
        assert_eq!("late_fee".parse::<TariffField>(), Ok(TariffField::LateFee));
        assert!("rent".parse::<TariffField>().is_err());
    }

    #[test]
    fn test_wire_format() {
        let settings = SystemSettings {
            water_rate: Decimal::new(5, 0),
            electricity_rate: Decimal::new(65, 1),
            late_fee: Decimal::new(100, 0),
            deposit_rate: Decimal::new(2000, 0),
        };
        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json["waterRate"], "5");
        assert_eq!(json["electricityRate"], "6.5");

        let back: SystemSettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_get_set() {
        let mut settings = SystemSettings::default();
        for field in TariffField::ALL {
            settings.set(field, Decimal::ONE);
            assert_eq!(settings.get(field), Decimal::ONE);
        }
    }
}
