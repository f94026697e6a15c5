//! Closed vocabularies for the emissions schema.
//!
//! Scope, source name, factor unit and calculation method are fixed
//! enumerations; an invalid value is a construction-time error, not a runtime
//! string mismatch. Each enum carries an `ALL` slice so generators can take
//! cross products or sample uniformly.

use std::fmt;

/// GHG Protocol scope of an emission source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Scope1,
    Scope2,
    Scope3,
}

impl Scope {
    pub const ALL: &'static [Scope] = &[Scope::Scope1, Scope::Scope2, Scope::Scope3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Scope1 => "1",
            Scope::Scope2 => "2",
            Scope::Scope3 => "3",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of emission source names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceName {
    Electricity,
    NaturalGas,
    DieselFuel,
    Gasoline,
    Coal,
    DieselTrucks,
    PassengerVehicles,
    AirTravel,
    MaritimeShipping,
    Rail,
    CementProduction,
    SteelManufacturing,
    ChemicalManufacturing,
    PaperMills,
    Refineries,
    LivestockEntericFermentation,
    RicePaddyCultivation,
    FertilizerApplication,
    ForestConversion,
    SoilManagement,
    Landfills,
    WasteIncineration,
    WastewaterTreatment,
    ResidentialHeating,
    CommercialHvacSystems,
    BuildingConstruction,
    RefrigerantsHfcs,
    Co2Capture,
    WasteOilCombustion,
    ConstructionEquipment,
    AgriculturalMachinery,
}

impl SourceName {
    pub const ALL: &'static [SourceName] = &[
        SourceName::Electricity,
        SourceName::NaturalGas,
        SourceName::DieselFuel,
        SourceName::Gasoline,
        SourceName::Coal,
        SourceName::DieselTrucks,
        SourceName::PassengerVehicles,
        SourceName::AirTravel,
        SourceName::MaritimeShipping,
        SourceName::Rail,
        SourceName::CementProduction,
        SourceName::SteelManufacturing,
        SourceName::ChemicalManufacturing,
        SourceName::PaperMills,
        SourceName::Refineries,
        SourceName::LivestockEntericFermentation,
        SourceName::RicePaddyCultivation,
        SourceName::FertilizerApplication,
        SourceName::ForestConversion,
        SourceName::SoilManagement,
        SourceName::Landfills,
        SourceName::WasteIncineration,
        SourceName::WastewaterTreatment,
        SourceName::ResidentialHeating,
        SourceName::CommercialHvacSystems,
        SourceName::BuildingConstruction,
        SourceName::RefrigerantsHfcs,
        SourceName::Co2Capture,
        SourceName::WasteOilCombustion,
        SourceName::ConstructionEquipment,
        SourceName::AgriculturalMachinery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceName::Electricity => "Electricity",
            SourceName::NaturalGas => "Natural Gas",
            SourceName::DieselFuel => "Diesel Fuel",
            SourceName::Gasoline => "Gasoline",
            SourceName::Coal => "Coal",
            SourceName::DieselTrucks => "Diesel Trucks",
            SourceName::PassengerVehicles => "Passenger Vehicles",
            SourceName::AirTravel => "Air Travel",
            SourceName::MaritimeShipping => "Shipping (Maritime)",
            SourceName::Rail => "Rail",
            SourceName::CementProduction => "Cement Production",
            SourceName::SteelManufacturing => "Steel Manufacturing",
            SourceName::ChemicalManufacturing => "Chemical Manufacturing",
            SourceName::PaperMills => "Paper Mills",
            SourceName::Refineries => "Refineries",
            SourceName::LivestockEntericFermentation => "Livestock (Enteric Fermentation)",
            SourceName::RicePaddyCultivation => "Rice Paddy Cultivation",
            SourceName::FertilizerApplication => "Fertilizer Application",
            SourceName::ForestConversion => "Forest Conversion",
            SourceName::SoilManagement => "Soil Management",
            SourceName::Landfills => "Landfills",
            SourceName::WasteIncineration => "Waste Incineration",
            SourceName::WastewaterTreatment => "Wastewater Treatment",
            SourceName::ResidentialHeating => "Residential Heating",
            SourceName::CommercialHvacSystems => "Commercial HVAC Systems",
            SourceName::BuildingConstruction => "Building Construction",
            SourceName::RefrigerantsHfcs => "Refrigerants (HFCs)",
            SourceName::Co2Capture => "CO2 Capture",
            SourceName::WasteOilCombustion => "Waste Oil Combustion",
            SourceName::ConstructionEquipment => "Construction Equipment",
            SourceName::AgriculturalMachinery => "Agricultural Machinery",
        }
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit an emission factor is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorUnit {
    KgCo2ePerUnit,
    GCo2ePerUnit,
    TCo2ePerUnit,
}

impl FactorUnit {
    pub const ALL: &'static [FactorUnit] = &[
        FactorUnit::KgCo2ePerUnit,
        FactorUnit::GCo2ePerUnit,
        FactorUnit::TCo2ePerUnit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactorUnit::KgCo2ePerUnit => "kgCO2e/unit",
            FactorUnit::GCo2ePerUnit => "gCO2e/unit",
            FactorUnit::TCo2ePerUnit => "tCO2e/unit",
        }
    }
}

impl fmt::Display for FactorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an emission factor was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationMethod {
    DirectMeasurement,
    FactorMultiplication,
    Hybrid,
}

impl CalculationMethod {
    pub const ALL: &'static [CalculationMethod] = &[
        CalculationMethod::DirectMeasurement,
        CalculationMethod::FactorMultiplication,
        CalculationMethod::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMethod::DirectMeasurement => "Method A: Direct Measurement",
            CalculationMethod::FactorMultiplication => "Method B: Emission Factor Multiplication",
            CalculationMethod::Hybrid => "Method C: Hybrid Approach",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_cardinalities() {
        assert_eq!(Scope::ALL.len(), 3);
        assert_eq!(SourceName::ALL.len(), 31);
        assert_eq!(FactorUnit::ALL.len(), 3);
        assert_eq!(CalculationMethod::ALL.len(), 3);
    }

    #[test]
    fn test_source_names_distinct() {
        let names: HashSet<&str> = SourceName::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names.len(), SourceName::ALL.len());
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::Scope2.to_string(), "2");
        assert_eq!(FactorUnit::KgCo2ePerUnit.to_string(), "kgCO2e/unit");
    }
}
