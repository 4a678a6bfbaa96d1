use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{Beneficiary, BeneficiaryStatus, RiskBand};

/// Sortable dashboard columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Name,
    Email,
    IncomeBand,
    CreditScore,
    RiskBand,
    ApplicationDate,
    Status,
}

impl SortKey {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Name,
            Self::Email,
            Self::IncomeBand,
            Self::CreditScore,
            Self::RiskBand,
            Self::ApplicationDate,
            Self::Status,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::IncomeBand => "incomeBand",
            Self::CreditScore => "creditScore",
            Self::RiskBand => "riskBand",
            Self::ApplicationDate => "applicationDate",
            Self::Status => "status",
        }
    }

    /// Column ordering for two rows. Text columns compare lower-cased.
    fn compare(self, a: &Beneficiary, b: &Beneficiary) -> Ordering {
        match self {
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            Self::IncomeBand => a.income_band.min.cmp(&b.income_band.min),
            Self::CreditScore => a.credit_score.cmp(&b.credit_score),
            Self::RiskBand => a
                .risk_band
                .label()
                .to_lowercase()
                .cmp(&b.risk_band.label().to_lowercase()),
            Self::ApplicationDate => a.application_date.cmp(&b.application_date),
            Self::Status => a.status.label().cmp(b.status.label()),
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|key| key.key().eq_ignore_ascii_case(raw))
            .ok_or_else(|| QueryError::SortKey(raw.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(QueryError::Direction(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click: the active column while ascending flips to descending,
    /// anything else sorts the chosen column ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }
}

/// Search, filters and sort applied to the beneficiary table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeneficiaryQuery {
    pub search: String,
    pub status: Option<BeneficiaryStatus>,
    pub risk: Option<RiskBand>,
    pub sort: SortConfig,
}

impl BeneficiaryQuery {
    fn matches(&self, row: &Beneficiary) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = row.name.to_lowercase().contains(&needle)
            || row.email.to_lowercase().contains(&needle);
        let matches_status = self.status.map_or(true, |status| row.status == status);
        let matches_risk = self.risk.map_or(true, |risk| row.risk_band == risk);

        matches_search && matches_status && matches_risk
    }

    /// Filter then stable-sort; ties keep their input order.
    pub fn apply(&self, rows: &[Beneficiary]) -> Vec<Beneficiary> {
        let mut filtered: Vec<Beneficiary> =
            rows.iter().filter(|row| self.matches(row)).cloned().collect();

        let SortConfig { key, direction } = self.sort;
        filtered.sort_by(|a, b| {
            let ordering = key.compare(a, b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        filtered
    }
}

/// Query string accepted by the list and export endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub risk: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl TryFrom<QueryParams> for BeneficiaryQuery {
    type Error = QueryError;

    fn try_from(params: QueryParams) -> Result<Self, Self::Error> {
        let status = match params.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) if raw.eq_ignore_ascii_case("all") => None,
            Some(raw) => Some(
                BeneficiaryStatus::parse(raw).ok_or_else(|| QueryError::Status(raw.to_string()))?,
            ),
        };
        let risk = match params.risk.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) if raw.eq_ignore_ascii_case("all") => None,
            Some(raw) => Some(RiskBand::parse(raw).ok_or_else(|| QueryError::Risk(raw.to_string()))?),
        };
        let key = match params.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => SortKey::default(),
        };
        let direction = match params.direction.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => SortDirection::default(),
        };

        Ok(Self {
            search: params.search.unwrap_or_default(),
            status,
            risk,
            sort: SortConfig::new(key, direction),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown status filter '{0}'")]
    Status(String),
    #[error("unknown risk filter '{0}'")]
    Risk(String),
    #[error("unknown sort column '{0}'")]
    SortKey(String),
    #[error("sort direction must be asc or desc, got '{0}'")]
    Direction(String),
}
