use anyhow::Result;
use clap::Args;

use crate::runtime::Error;

/// Gas constant, kcal/(mol*K)
pub const R_VALUE: f64 = 0.0019858775;
/// Added to a Celsius temperature to get Kelvin
pub const CELSIUS_TO_KELVIN: f64 = 273.0;
const NANOMOLAR: f64 = 1e9;

pub const INVALID_CONVERSION_TYPE: &str =
    "invalid conversion type given (type 'dG' for dG_to_Kd or 'Kd' for Kd_to_dG)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionType {
    DgToKd,
    KdToDg,
}

impl std::str::FromStr for ConversionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dG" => Ok(ConversionType::DgToKd),
            "Kd" => Ok(ConversionType::KdToDg),
            _ => Err(Error::usage(INVALID_CONVERSION_TYPE)),
        }
    }
}

/// Commandline option: convert between Kd and dG
#[derive(Args)]
pub struct AffinityCMD {
    /// Type of conversion: "dG" for dG to Kd, "Kd" for Kd to dG
    #[arg(long = "conversion_type", visible_alias = "ct")]
    pub conversion_type: String,

    /// Value to convert. Kd in nM, dG in kcal/mol
    #[arg(short = 'v', long = "value", allow_negative_numbers = true)]
    pub value: f64,

    /// Temperature in Celsius
    #[arg(short = 't', long = "temp", allow_negative_numbers = true)]
    pub temp: f64,
}

impl AffinityCMD {
    pub fn try_execute(&mut self) -> Result<()> {
        let conversion: ConversionType = self.conversion_type.parse()?;
        let converted = convert(conversion, self.value, self.temp);
        println!("{}", conversion_message(conversion, self.value, self.temp, converted));
        Ok(())
    }
}

/// Line reported for one conversion
pub fn conversion_message(
    conversion: ConversionType,
    value: f64,
    temp_celsius: f64,
    converted: f64,
) -> String {
    match conversion {
        ConversionType::DgToKd => format!(
            "A dG of {} kcal/mol at {}C gives a Kd of {} nM",
            value, temp_celsius, converted
        ),
        ConversionType::KdToDg => {
            format!("A Kd of {} nM gives a dG of {} kcal/mol", value, converted)
        }
    }
}

/// Association constant (1/M) for a free energy: exp(-dG/RT)
pub fn association_constant(dg: f64, temp_kelvin: f64) -> f64 {
    (-dg / (R_VALUE * temp_kelvin)).exp()
}

/// Free energy for an association constant (1/M): -RT ln(Ka)
pub fn free_energy(ka: f64, temp_kelvin: f64) -> f64 {
    -R_VALUE * temp_kelvin * ka.ln()
}

/// Kd in nM for `DgToKd`, dG in kcal/mol for `KdToDg`.
pub fn convert(conversion: ConversionType, value: f64, temp_celsius: f64) -> f64 {
    let temp_kelvin = temp_celsius + CELSIUS_TO_KELVIN;
    match conversion {
        ConversionType::DgToKd => 1.0 / (association_constant(value, temp_kelvin) / NANOMOLAR),
        ConversionType::KdToDg => free_energy(1.0 / (value / NANOMOLAR), temp_kelvin),
    }
}
