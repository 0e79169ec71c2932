//! What gets scraped from a profile page, and where it lives.
//!
//! The selectors follow the current societe.com markup. When the site
//! changes, this table is the only thing to edit.

/// A scraped field of a company profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DateCreated,
    LegalForm,
    BusinessNames,
    Address,
    SirenNumber,
    SiretNumber,
    VatNumber,
    RcsNumber,
    ActivityCode,
    DeclaredMainActivity,
    CollectiveAgreement,
    RcsStatus,
    InseeStatus,
    RegistrationDateRcs,
    RegistrationDateInsee,
    EmployeeNumber,
    ShareCapital,
    PreviousYearRevenue,
}

/// Whether a missing value is kept as a visible marker or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Required,
    Optional,
}

/// How a field's value is found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locate {
    /// Text of the first element matching the expression.
    Text(&'static str),
    /// First expression in the chain that yields text.
    FirstOf(&'static [&'static str]),
    /// First `DD-MM-YYYY` date inside the element's text.
    DatePattern(&'static str),
}

impl Locate {
    /// Expression reported when the field cannot be found.
    pub fn primary(&self) -> &'static str {
        match *self {
            Locate::Text(expr) | Locate::DatePattern(expr) => expr,
            Locate::FirstOf(chain) => chain.first().copied().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    /// Column title in exports.
    pub title: &'static str,
    pub tier: Tier,
    pub locate: Locate,
}

/// Column title of the profile slug, which comes from the URL, not the page.
pub const PROFILE_TITLE: &str = "Societe URL";

pub const DATE_CREATED_SELECTOR: &str = r#"//*[@id="rensjur"]/tbody/tr[1]/td[2]/div/span[1]"#;

const EMPLOYEE_NUMBER_CHAIN: &[&str] = &[
    "#trancheeff-histo-description",
    "#effmoy-histo-description",
];

pub static DATE_CREATED: FieldSpec = FieldSpec {
    field: Field::DateCreated,
    title: "Date created",
    tier: Tier::Required,
    locate: Locate::DatePattern(DATE_CREATED_SELECTOR),
};

pub static LEGAL_FORM: FieldSpec = FieldSpec {
    field: Field::LegalForm,
    title: "Legal form",
    tier: Tier::Required,
    locate: Locate::Text("#catjur-histo-description"),
};

pub static BUSINESS_NAMES: FieldSpec = FieldSpec {
    field: Field::BusinessNames,
    title: "Business names",
    tier: Tier::Required,
    locate: Locate::Text(
        r#"//td[contains(text(), "Noms commerciaux")]/following-sibling::td"#,
    ),
};

pub static ADDRESS: FieldSpec = FieldSpec {
    field: Field::Address,
    title: "Address",
    tier: Tier::Required,
    locate: Locate::Text(r#"//td[contains(text(), "Adresse postale")]/following-sibling::td"#),
};

pub static SIREN_NUMBER: FieldSpec = FieldSpec {
    field: Field::SirenNumber,
    title: "SIREN number",
    tier: Tier::Required,
    locate: Locate::Text("#siren_number > span.copyNumber__copy"),
};

pub static SIRET_NUMBER: FieldSpec = FieldSpec {
    field: Field::SiretNumber,
    title: "SIRET number",
    tier: Tier::Required,
    locate: Locate::Text("#siret_number"),
};

pub static VAT_NUMBER: FieldSpec = FieldSpec {
    field: Field::VatNumber,
    title: "VAT number",
    tier: Tier::Optional,
    locate: Locate::Text("#tva_number > span.copyNumber__copy"),
};

pub static RCS_NUMBER: FieldSpec = FieldSpec {
    field: Field::RcsNumber,
    title: "RCS number",
    tier: Tier::Required,
    locate: Locate::Text(r#"//td[contains(text(), "Numéro RCS")]/following-sibling::td"#),
};

pub static ACTIVITY_CODE: FieldSpec = FieldSpec {
    field: Field::ActivityCode,
    title: "Activity code NAF or APE",
    tier: Tier::Required,
    locate: Locate::Text("#ape-histo-description"),
};

pub static DECLARED_MAIN_ACTIVITY: FieldSpec = FieldSpec {
    field: Field::DeclaredMainActivity,
    title: "Declared main activity",
    tier: Tier::Optional,
    locate: Locate::Text(
        r#"//td[contains(text(), "Activité principale déclarée")]/following-sibling::td"#,
    ),
};

pub static COLLECTIVE_AGREEMENT: FieldSpec = FieldSpec {
    field: Field::CollectiveAgreement,
    title: "Collective agreement",
    tier: Tier::Optional,
    locate: Locate::Text("#idccdeduit_number"),
};

pub static RCS_STATUS: FieldSpec = FieldSpec {
    field: Field::RcsStatus,
    title: "RCS status",
    tier: Tier::Optional,
    locate: Locate::Text(
        "//td[contains(text(), 'Statut RCS')]/following-sibling::td//span[contains(@class, 'soSecondaryColor')]",
    ),
};

pub static INSEE_STATUS: FieldSpec = FieldSpec {
    field: Field::InseeStatus,
    title: "Insee status",
    tier: Tier::Optional,
    locate: Locate::Text(
        "//td[contains(text(), 'Statut INSEE')]/following-sibling::td//span[contains(@class, 'soSecondaryColor')]",
    ),
};

pub static REGISTRATION_DATE_RCS: FieldSpec = FieldSpec {
    field: Field::RegistrationDateRcs,
    title: "Registration date RCS",
    tier: Tier::Optional,
    locate: Locate::Text(
        r#"//td[contains(text(), "Date d'immatriculation RCS")]/following-sibling::td"#,
    ),
};

pub static REGISTRATION_DATE_INSEE: FieldSpec = FieldSpec {
    field: Field::RegistrationDateInsee,
    title: "Registration date Insee",
    tier: Tier::Optional,
    locate: Locate::Text(
        r#"//td[contains(text(), "Date d'enregistrement INSEE")]/following-sibling::td"#,
    ),
};

pub static EMPLOYEE_NUMBER: FieldSpec = FieldSpec {
    field: Field::EmployeeNumber,
    title: "Employee number",
    tier: Tier::Optional,
    locate: Locate::FirstOf(EMPLOYEE_NUMBER_CHAIN),
};

pub static SHARE_CAPITAL: FieldSpec = FieldSpec {
    field: Field::ShareCapital,
    title: "Share capital",
    tier: Tier::Optional,
    locate: Locate::Text("#capital-histo-description"),
};

pub static PREVIOUS_YEAR_REVENUE: FieldSpec = FieldSpec {
    field: Field::PreviousYearRevenue,
    title: "Previous year revenue",
    tier: Tier::Optional,
    locate: Locate::Text(
        r#"//td[contains(text(), "Chiffre d'affaires")]/following-sibling::td/span[@class='numdisplay']"#,
    ),
};

/// Every scraped field, in extraction and column order.
pub static SCHEMA: [&FieldSpec; 18] = [
    &DATE_CREATED,
    &LEGAL_FORM,
    &BUSINESS_NAMES,
    &ADDRESS,
    &SIREN_NUMBER,
    &SIRET_NUMBER,
    &VAT_NUMBER,
    &RCS_NUMBER,
    &ACTIVITY_CODE,
    &DECLARED_MAIN_ACTIVITY,
    &COLLECTIVE_AGREEMENT,
    &RCS_STATUS,
    &INSEE_STATUS,
    &REGISTRATION_DATE_RCS,
    &REGISTRATION_DATE_INSEE,
    &EMPLOYEE_NUMBER,
    &SHARE_CAPITAL,
    &PREVIOUS_YEAR_REVENUE,
];

/// Column titles of an exported record: the profile slug, then [`SCHEMA`].
pub fn column_titles() -> impl Iterator<Item = &'static str> {
    std::iter::once(PROFILE_TITLE).chain(SCHEMA.iter().map(|s| s.title))
}
