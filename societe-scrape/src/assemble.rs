use crate::extract::FieldExtractor;
use crate::record::CompanyRecord;
use crate::schema::*;
use societe_drivers::societe_browser::PageHandle;
use tracing::debug;

/// Read every [`SCHEMA`] field from `page`, in table order, into one record.
pub async fn assemble(
    page: &dyn PageHandle,
    profile_name: &str,
    extractor: &FieldExtractor,
) -> CompanyRecord {
    let record = CompanyRecord {
        profile_name: profile_name.to_string(),
        date_created: extractor.required(page, &DATE_CREATED).await,
        legal_form: extractor.required(page, &LEGAL_FORM).await,
        business_names: extractor.required(page, &BUSINESS_NAMES).await,
        address: extractor.required(page, &ADDRESS).await,
        siren_number: extractor.required(page, &SIREN_NUMBER).await,
        siret_number: extractor.required(page, &SIRET_NUMBER).await,
        vat_number: extractor.optional(page, &VAT_NUMBER).await,
        rcs_number: extractor.required(page, &RCS_NUMBER).await,
        activity_code: extractor.required(page, &ACTIVITY_CODE).await,
        declared_main_activity: extractor.optional(page, &DECLARED_MAIN_ACTIVITY).await,
        collective_agreement: extractor.optional(page, &COLLECTIVE_AGREEMENT).await,
        rcs_status: extractor.optional(page, &RCS_STATUS).await,
        insee_status: extractor.optional(page, &INSEE_STATUS).await,
        registration_date_rcs: extractor.optional(page, &REGISTRATION_DATE_RCS).await,
        registration_date_insee: extractor.optional(page, &REGISTRATION_DATE_INSEE).await,
        employee_number: extractor.optional(page, &EMPLOYEE_NUMBER).await,
        share_capital: extractor.optional(page, &SHARE_CAPITAL).await,
        previous_year_revenue: extractor.optional(page, &PREVIOUS_YEAR_REVENUE).await,
    };

    debug!(
        target: "societe.extract",
        profile = %profile_name,
        missing_required = missing_required(&record),
        "record assembled"
    );
    record
}

fn missing_required(record: &CompanyRecord) -> usize {
    [
        record.date_created(),
        record.legal_form(),
        record.business_names(),
        record.address(),
        record.siren_number(),
        record.siret_number(),
        record.rcs_number(),
        record.activity_code(),
    ]
    .iter()
    .filter(|r| !r.is_found())
    .count()
}
