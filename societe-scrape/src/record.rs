use crate::schema::{Field, PROFILE_TITLE, SCHEMA};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Prefix of the text written in place of a required value that was not found.
pub const NOT_FOUND_PREFIX: &str = "Data not found for selector: ";

/// Outcome of reading a required field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Required {
    Found(String),
    NotFound { locator: String },
}

impl Required {
    pub fn not_found(locator: impl Into<String>) -> Self {
        Required::NotFound {
            locator: locator.into(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Required::Found(_))
    }

    pub fn found(&self) -> Option<&str> {
        match self {
            Required::Found(text) => Some(text),
            Required::NotFound { .. } => None,
        }
    }

    pub fn into_found(self) -> Option<String> {
        match self {
            Required::Found(text) => Some(text),
            Required::NotFound { .. } => None,
        }
    }

    /// The value as written to exports: the text, or the not-found marker.
    ///
    /// ```
    /// use societe_scrape::Required;
    ///
    /// assert_eq!(Required::Found("SA".into()).as_text(), "SA");
    /// assert_eq!(
    ///     Required::not_found("#siret_number").as_text(),
    ///     "Data not found for selector: #siret_number"
    /// );
    /// ```
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Required::Found(text) => Cow::Borrowed(text),
            Required::NotFound { locator } => Cow::Owned(format!("{NOT_FOUND_PREFIX}{locator}")),
        }
    }
}

impl fmt::Display for Required {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl Serialize for Required {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_text())
    }
}

/// Registry data scraped from one profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    pub(crate) profile_name: String,
    pub(crate) date_created: Required,
    pub(crate) legal_form: Required,
    pub(crate) business_names: Required,
    pub(crate) address: Required,
    pub(crate) siren_number: Required,
    pub(crate) siret_number: Required,
    pub(crate) vat_number: Option<String>,
    pub(crate) rcs_number: Required,
    pub(crate) activity_code: Required,
    pub(crate) declared_main_activity: Option<String>,
    pub(crate) collective_agreement: Option<String>,
    pub(crate) rcs_status: Option<String>,
    pub(crate) insee_status: Option<String>,
    pub(crate) registration_date_rcs: Option<String>,
    pub(crate) registration_date_insee: Option<String>,
    pub(crate) employee_number: Option<String>,
    pub(crate) share_capital: Option<String>,
    pub(crate) previous_year_revenue: Option<String>,
}

impl CompanyRecord {
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }
    pub fn date_created(&self) -> &Required {
        &self.date_created
    }
    pub fn legal_form(&self) -> &Required {
        &self.legal_form
    }
    pub fn business_names(&self) -> &Required {
        &self.business_names
    }
    pub fn address(&self) -> &Required {
        &self.address
    }
    pub fn siren_number(&self) -> &Required {
        &self.siren_number
    }
    pub fn siret_number(&self) -> &Required {
        &self.siret_number
    }
    pub fn vat_number(&self) -> Option<&str> {
        self.vat_number.as_deref()
    }
    pub fn rcs_number(&self) -> &Required {
        &self.rcs_number
    }
    pub fn activity_code(&self) -> &Required {
        &self.activity_code
    }
    pub fn declared_main_activity(&self) -> Option<&str> {
        self.declared_main_activity.as_deref()
    }
    pub fn collective_agreement(&self) -> Option<&str> {
        self.collective_agreement.as_deref()
    }
    pub fn rcs_status(&self) -> Option<&str> {
        self.rcs_status.as_deref()
    }
    pub fn insee_status(&self) -> Option<&str> {
        self.insee_status.as_deref()
    }
    pub fn registration_date_rcs(&self) -> Option<&str> {
        self.registration_date_rcs.as_deref()
    }
    pub fn registration_date_insee(&self) -> Option<&str> {
        self.registration_date_insee.as_deref()
    }
    pub fn employee_number(&self) -> Option<&str> {
        self.employee_number.as_deref()
    }
    pub fn share_capital(&self) -> Option<&str> {
        self.share_capital.as_deref()
    }
    pub fn previous_year_revenue(&self) -> Option<&str> {
        self.previous_year_revenue.as_deref()
    }

    /// Export value of `field`. Required fields always have one.
    pub fn value(&self, field: Field) -> Option<Cow<'_, str>> {
        fn required(value: &Required) -> Option<Cow<'_, str>> {
            Some(value.as_text())
        }
        fn optional(value: &Option<String>) -> Option<Cow<'_, str>> {
            value.as_deref().map(Cow::Borrowed)
        }
        match field {
            Field::DateCreated => required(&self.date_created),
            Field::LegalForm => required(&self.legal_form),
            Field::BusinessNames => required(&self.business_names),
            Field::Address => required(&self.address),
            Field::SirenNumber => required(&self.siren_number),
            Field::SiretNumber => required(&self.siret_number),
            Field::VatNumber => optional(&self.vat_number),
            Field::RcsNumber => required(&self.rcs_number),
            Field::ActivityCode => required(&self.activity_code),
            Field::DeclaredMainActivity => optional(&self.declared_main_activity),
            Field::CollectiveAgreement => optional(&self.collective_agreement),
            Field::RcsStatus => optional(&self.rcs_status),
            Field::InseeStatus => optional(&self.insee_status),
            Field::RegistrationDateRcs => optional(&self.registration_date_rcs),
            Field::RegistrationDateInsee => optional(&self.registration_date_insee),
            Field::EmployeeNumber => optional(&self.employee_number),
            Field::ShareCapital => optional(&self.share_capital),
            Field::PreviousYearRevenue => optional(&self.previous_year_revenue),
        }
    }

    /// `(column title, value)` pairs in export order, starting with the profile slug.
    pub fn columns(&self) -> Vec<(&'static str, Option<Cow<'_, str>>)> {
        std::iter::once((PROFILE_TITLE, Some(Cow::Borrowed(self.profile_name.as_str()))))
            .chain(SCHEMA.iter().map(|spec| (spec.title, self.value(spec.field))))
            .collect()
    }
}

impl Serialize for CompanyRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for (title, value) in &columns {
            map.serialize_entry(title, &value.as_deref())?;
        }
        map.end()
    }
}
