//! Household profile structures matching the simulator form

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::numeric::{
    lenient_amount, lenient_date, lenient_days, lenient_optional_days, to_number_or_zero,
};

/// Household-composition category driving thresholds and exemptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    One,
    Two,
    Three,
}

impl Category {
    pub fn number(&self) -> u8 {
        match self {
            Category::One => 1,
            Category::Two => 2,
            Category::Three => 3,
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Category::One),
            2 => Ok(Category::Two),
            3 => Ok(Category::Three),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.number()
    }
}

/// Serde adapter: a category given as a number or numeric text
///
/// Coerced like every other numeric input, but anything outside 1..=3 is rejected.
fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let n = to_number_or_zero(&value);
    if n.fract() != 0.0 || !(1.0..=3.0).contains(&n) {
        return Err(D::Error::custom(format!("Unknown category: {}", value)));
    }
    Category::try_from(n as u8).map_err(D::Error::custom)
}

/// Household situation as selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseholdSituation {
    #[serde(rename = "isolé", alias = "isole")]
    Isole,
    #[serde(rename = "cohabitant")]
    Cohabitant,
    #[serde(rename = "famille")]
    Famille,
}

impl HouseholdSituation {
    pub fn as_str(&self) -> &'static str {
        match self {
            HouseholdSituation::Isole => "isolé",
            HouseholdSituation::Cohabitant => "cohabitant",
            HouseholdSituation::Famille => "famille",
        }
    }
}

/// One monthly income line of a person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeLine {
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub taxable_amount: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub exempt_amount: f64,
}

/// Labelled monthly amount (in-kind advantage, miscellaneous resource)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountLine {
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
}

/// Socio-professional exemptions a person qualifies for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExemptionFlags {
    #[serde(default)]
    pub general: bool,
    #[serde(default)]
    pub student: bool,
    #[serde(default)]
    pub labor_shortage: bool,
    #[serde(default)]
    pub artistic: bool,
    /// Days covered in the month; 0 means the whole month
    #[serde(default, deserialize_with = "lenient_days")]
    pub counter_days: u32,
}

/// Applicant or partner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub income_lines: Vec<IncomeLine>,
    #[serde(default)]
    pub exemptions: ExemptionFlags,
}

/// Benefit paid per day with three possible bases
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBenefit {
    /// Flat monthly amount
    #[serde(default, deserialize_with = "lenient_amount")]
    pub fixed_monthly: f64,
    /// Daily rate paid 26 days a month
    #[serde(default, deserialize_with = "lenient_amount")]
    pub per_day_rate: f64,
    /// Daily rate paid on every payable day of the year
    #[serde(default, deserialize_with = "lenient_amount")]
    pub per_annual_day_rate: f64,
}

/// Replacement incomes (monthly)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementIncomeInputs {
    #[serde(default)]
    pub unemployment: DailyBenefit,
    #[serde(default)]
    pub health_insurance: DailyBenefit,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub pension: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub bridging_right: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub disability_allowance: f64,
}

/// Miscellaneous monthly resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscResources {
    #[serde(default)]
    pub general: Vec<AmountLine>,
    #[serde(default)]
    pub volunteer: Vec<AmountLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RealEstateKind {
    Built,
    Unbuilt,
    Foreign,
}

/// A property held in Belgium or abroad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateAsset {
    pub kind: RealEstateKind,
    /// Non-indexed cadastral income (annual)
    #[serde(default, deserialize_with = "lenient_amount")]
    pub cadastral_income: f64,
    /// Mortgage interest paid (annual)
    #[serde(default, deserialize_with = "lenient_amount")]
    pub interest_paid: f64,
    /// Life annuity paid for the purchase (annual)
    #[serde(default, deserialize_with = "lenient_amount")]
    pub annuity_paid: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub annual_rent: f64,
    /// Income of a foreign property (annual), taken as is
    #[serde(default, deserialize_with = "lenient_amount")]
    pub foreign_income: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub share_percent: f64,
}

impl RealEstateAsset {
    pub fn new(kind: RealEstateKind, cadastral_income: f64, share_percent: f64) -> Self {
        Self {
            kind,
            cadastral_income,
            interest_paid: 0.0,
            annuity_paid: 0.0,
            annual_rent: 0.0,
            foreign_income: 0.0,
            share_percent,
        }
    }

    pub fn share(&self) -> f64 {
        self.share_percent / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CessionKind {
    UniqueBuilt,
    UniqueUnbuilt,
    OtherBuilt,
    OtherUnbuilt,
    Movable,
}

impl CessionKind {
    /// Sole built or unbuilt good of the household
    pub fn is_unique(&self) -> bool {
        matches!(self, CessionKind::UniqueBuilt | CessionKind::UniqueUnbuilt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OwnershipTitle {
    Full,
    BareOwnership,
    Usufruct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CessionNature {
    /// Sale or other transfer for consideration
    Onerous,
    /// Gift
    Gratuitous,
}

/// A transfer of a good
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CessionRecord {
    pub kind: CessionKind,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub venal_value: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub share_percent: f64,
    pub ownership_title: OwnershipTitle,
    pub nature: CessionNature,
    #[serde(default, deserialize_with = "lenient_date")]
    pub transfer_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub ri_start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub personal_debts: f64,
    #[serde(default)]
    pub equity_waiver: bool,
}

impl CessionRecord {
    pub fn share(&self) -> f64 {
        self.share_percent / 100.0
    }
}

/// Liquid capital
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovableAssets {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub capital_amount: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub share_percent: f64,
}

/// How much of a cohabitant's excess resources is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupportMode {
    #[default]
    None,
    Full,
    Capped,
}

/// A person living under the same roof
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohabitantRecord {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_annual_resources: f64,
    #[serde(deserialize_with = "lenient_category")]
    pub category: Category,
    #[serde(default)]
    pub support_mode: SupportMode,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub capped_percent: f64,
}

/// Complete household profile submitted for a determination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdProfile {
    pub reference_date: NaiveDate,
    /// Days of the reference month counted; `None` means the full month
    #[serde(default, deserialize_with = "lenient_optional_days")]
    pub days_counted_in_period: Option<u32>,
    pub situation: HouseholdSituation,
    #[serde(default)]
    pub applicant: Person,
    #[serde(default)]
    pub partner: Option<Person>,
    #[serde(default)]
    pub replacement_income: ReplacementIncomeInputs,
    #[serde(default)]
    pub in_kind_advantages: Vec<AmountLine>,
    #[serde(default)]
    pub miscellaneous: MiscResources,
    #[serde(default)]
    pub real_estate: Vec<RealEstateAsset>,
    #[serde(default)]
    pub cessions: Vec<CessionRecord>,
    #[serde(default)]
    pub movable_assets: MovableAssets,
    #[serde(default)]
    pub cohabitants: Vec<CohabitantRecord>,
}

impl HouseholdProfile {
    /// Empty profile for a reference date and situation
    pub fn new(reference_date: NaiveDate, situation: HouseholdSituation) -> Self {
        Self {
            reference_date,
            days_counted_in_period: None,
            situation,
            applicant: Person::default(),
            partner: None,
            replacement_income: ReplacementIncomeInputs::default(),
            in_kind_advantages: Vec::new(),
            miscellaneous: MiscResources::default(),
            real_estate: Vec::new(),
            cessions: Vec::new(),
            movable_assets: MovableAssets::default(),
            cohabitants: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_round_trips_as_number() {
        assert_eq!(serde_json::to_value(Category::Three).unwrap(), json!(3));
        let c: Category = serde_json::from_value(json!(1)).unwrap();
        assert_eq!(c, Category::One);
        assert!(serde_json::from_value::<Category>(json!(4)).is_err());
    }

    #[test]
    fn test_profile_coerces_invalid_amounts() {
        let profile: HouseholdProfile = serde_json::from_value(json!({
            "referenceDate": "2025-02-01",
            "situation": "isolé",
            "applicant": {
                "incomeLines": [
                    {"label": "Salaire", "taxableAmount": "1000", "exemptAmount": "n/a"}
                ]
            },
            "movableAssets": {"capitalAmount": null, "sharePercent": "100"},
            "cessions": [{
                "kind": "uniqueBuilt",
                "venalValue": "abc",
                "sharePercent": 100,
                "ownershipTitle": "full",
                "nature": "onerous",
                "transferDate": "not a date"
            }]
        }))
        .unwrap();

        assert_eq!(profile.applicant.income_lines[0].taxable_amount, 1000.0);
        assert_eq!(profile.applicant.income_lines[0].exempt_amount, 0.0);
        assert_eq!(profile.movable_assets.capital_amount, 0.0);
        assert_eq!(profile.movable_assets.share_percent, 100.0);
        assert_eq!(profile.cessions[0].venal_value, 0.0);
        assert_eq!(profile.cessions[0].transfer_date, None);
        assert_eq!(profile.days_counted_in_period, None);
        assert!(profile.partner.is_none());
    }

    #[test]
    fn test_cohabitant_category_accepts_numeric_text() {
        let record: CohabitantRecord = serde_json::from_value(json!({
            "totalAnnualResources": "20000",
            "category": "2",
            "supportMode": "full"
        }))
        .unwrap();
        assert_eq!(record.category, Category::Two);

        let record: CohabitantRecord =
            serde_json::from_value(json!({"category": 3.0})).unwrap();
        assert_eq!(record.category, Category::Three);
        assert_eq!(record.support_mode, SupportMode::None);
    }

    #[test]
    fn test_cohabitant_category_still_rejects_out_of_range() {
        for bad in [json!(0), json!(4), json!("x"), json!(1.5), json!(null)] {
            let result = serde_json::from_value::<CohabitantRecord>(json!({"category": bad}));
            assert!(result.is_err());
        }
        assert!(serde_json::from_value::<CohabitantRecord>(json!({})).is_err());
    }

    #[test]
    fn test_situation_accepts_unaccented_alias() {
        let s: HouseholdSituation = serde_json::from_value(json!("isole")).unwrap();
        assert_eq!(s, HouseholdSituation::Isole);
        assert_eq!(serde_json::to_value(s).unwrap(), json!("isolé"));
    }

    #[test]
    fn test_unique_cession_kinds() {
        assert!(CessionKind::UniqueBuilt.is_unique());
        assert!(CessionKind::UniqueUnbuilt.is_unique());
        assert!(!CessionKind::OtherBuilt.is_unique());
        assert!(!CessionKind::Movable.is_unique());
    }
}
