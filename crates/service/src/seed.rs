//! Idempotent catalog fixtures: forms, categories, services and a basic price
//! per service. Rows are matched on their natural keys, so re-running only
//! fills in what is missing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use models::{form, service, service_category, service_price, slug::slugify};
use crate::errors::ServiceError;

pub const BASIC_PACKAGE: &str = "Basic Package";
pub const BASIC_PRICE: i32 = 2500;
pub const BASIC_DISCOUNT: i32 = 500;

pub const CATEGORIES: [&str; 5] = ["Consultation", "Property Services", "Document Review", "Drafting", "Legal Notices"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub forms: usize,
    pub categories: usize,
    pub services: usize,
    pub prices: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize { self.forms + self.categories + self.services + self.prices }
}

struct FormFixture {
    name: &'static str,
    description: &'static str,
    extra_fields: Value,
}

struct ServiceFixture {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    form: &'static str,
}

const CONSULTATION_FORM: &str = "Consultation Form";
const PROPERTY_FORM: &str = "Property Services Form";
const DOCUMENT_FORM: &str = "Document Review Form";
const DRAFTING_FORM: &str = "Drafting Services Form";
const NOTICE_FORM: &str = "Legal Notice Form";

fn text_field(kind: &str, name: &str, label: &str) -> Value {
    json!({"type": kind, "name": name, "label": label, "required": true})
}

fn form_fixtures() -> Vec<FormFixture> {
    vec![
        FormFixture {
            name: CONSULTATION_FORM,
            description: "Form for consultation services",
            extra_fields: json!([
                text_field("tel", "phone", "Phone Number"),
                text_field("textarea", "query", "Legal Query"),
            ]),
        },
        FormFixture {
            name: PROPERTY_FORM,
            description: "Form for property-related services",
            extra_fields: json!([
                text_field("tel", "phone", "Phone Number"),
                text_field("file", "documents", "Upload Documents"),
            ]),
        },
        FormFixture {
            name: DOCUMENT_FORM,
            description: "Form for document review services",
            extra_fields: json!([text_field("file", "documents", "Upload Documents for Review")]),
        },
        FormFixture {
            name: DRAFTING_FORM,
            description: "Form for drafting services",
            extra_fields: json!([{
                "type": "select",
                "name": "documentType",
                "label": "Document Type",
                "required": true,
                "options": [
                    "Residential Rent Agreement",
                    "Commercial Rent Agreement",
                    "Leave & License Agreement",
                    "Sub-lease Agreement",
                    "Sale Deed",
                    "Agreement to Sell",
                    "Gift Deed",
                    "Last Will"
                ]
            }]),
        },
        FormFixture {
            name: NOTICE_FORM,
            description: "Form for legal notice services",
            extra_fields: json!([text_field("textarea", "noticeDetails", "Notice Details")]),
        },
    ]
}

const SERVICES: [ServiceFixture; 17] = [
    ServiceFixture { name: "On Call Lawyer Consultation", description: "Get instant legal advice from experienced lawyers over phone", category: "Consultation", form: CONSULTATION_FORM },
    ServiceFixture { name: "Property Paper Review", description: "Comprehensive review of property documents and papers", category: "Property Services", form: PROPERTY_FORM },
    ServiceFixture { name: "Title Search Report", description: "Detailed title search and verification report", category: "Property Services", form: PROPERTY_FORM },
    ServiceFixture { name: "Property Agreements", description: "Drafting and review of property-related agreements", category: "Property Services", form: PROPERTY_FORM },
    ServiceFixture { name: "Contract Review", description: "Professional review of contracts and legal documents", category: "Document Review", form: DOCUMENT_FORM },
    ServiceFixture { name: "Legal Document Check", description: "Thorough checking and verification of legal documents", category: "Document Review", form: DOCUMENT_FORM },
    ServiceFixture { name: "Residential Rent Agreement", description: "Professional drafting of residential rent agreements", category: "Drafting", form: DRAFTING_FORM },
    ServiceFixture { name: "Commercial Rent Agreement", description: "Comprehensive commercial rent agreement drafting", category: "Drafting", form: DRAFTING_FORM },
    ServiceFixture { name: "Leave & License Agreement", description: "Professional leave and license agreement drafting", category: "Drafting", form: DRAFTING_FORM },
    ServiceFixture { name: "Sub-lease Agreement", description: "Drafting of sub-lease agreements for property subletting", category: "Drafting", form: DRAFTING_FORM },
    ServiceFixture { name: "Sale Deed", description: "Professional sale deed drafting and documentation", category: "Drafting", form: DRAFTING_FORM },
    ServiceFixture { name: "Agreement to Sell", description: "Comprehensive agreement to sell documentation", category: "Drafting", form: DRAFTING_FORM },
    ServiceFixture { name: "Gift Deed", description: "Professional gift deed drafting and execution", category: "Drafting", form: DRAFTING_FORM },
    ServiceFixture { name: "Last Will", description: "Professional will drafting and legal documentation", category: "Drafting", form: DRAFTING_FORM },
    ServiceFixture { name: "Draft Legal Notice", description: "Professional drafting of legal notices and communications", category: "Legal Notices", form: NOTICE_FORM },
    ServiceFixture { name: "Reply to Legal Notice", description: "Professional response to legal notices and communications", category: "Legal Notices", form: NOTICE_FORM },
    ServiceFixture { name: "Power of Attorney", description: "Professional power of attorney drafting and execution", category: "Drafting", form: DRAFTING_FORM },
];

fn service_content(name: &str) -> Value {
    json!({
        "sections": [
            {"title": "Service Overview", "content": format!("Professional {} service with expert legal guidance.", name.to_lowercase())},
            {"title": "What's Included", "content": "Comprehensive legal assistance with experienced lawyers."},
            {"title": "Process", "content": "Simple 3-step process: Submit details, Get consultation, Receive documents."}
        ]
    })
}

async fn ensure_form(db: &DatabaseConnection, fx: &FormFixture, report: &mut SeedReport) -> Result<Uuid, ServiceError> {
    if let Some(existing) = form::Entity::find().filter(form::Column::Name.eq(fx.name)).one(db).await? {
        return Ok(existing.id);
    }
    let mut fields = vec![
        text_field("text", "name", "Full Name"),
        text_field("email", "email", "Email Address"),
    ];
    if let Value::Array(extra) = &fx.extra_fields {
        fields.extend(extra.iter().cloned());
    }
    let now = Utc::now().into();
    let created = form::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(fx.name.to_string()),
        description: Set(Some(fx.description.to_string())),
        form_type: Set(form::SERVICE_FORM.to_string()),
        schema_json: Set(json!({ "fields": fields })),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    report.forms += 1;
    Ok(created.id)
}

async fn ensure_category(db: &DatabaseConnection, name: &str, report: &mut SeedReport) -> Result<(), ServiceError> {
    let exists = service_category::Entity::find()
        .filter(service_category::Column::Name.eq(name))
        .one(db)
        .await?
        .is_some();
    if !exists {
        let validated = service_category::validate_name(name)?;
        service_category::new_active(&validated).insert(db).await?;
        report.categories += 1;
    }
    Ok(())
}

async fn ensure_service(db: &DatabaseConnection, fx: &ServiceFixture, form_id: Option<Uuid>, report: &mut SeedReport) -> Result<Uuid, ServiceError> {
    let existing = service::Entity::find()
        .filter(service::Column::Name.eq(fx.name))
        .filter(service::Column::CategoryName.eq(fx.category))
        .one(db)
        .await?;
    if let Some(s) = existing {
        return Ok(s.id);
    }
    let now = Utc::now().into();
    let created = service::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(fx.name.to_string()),
        slug: Set(slugify(fx.name)),
        description: Set(Some(fx.description.to_string())),
        category_name: Set(fx.category.to_string()),
        form_id: Set(form_id),
        is_active: Set(true),
        content_json: Set(Some(service_content(fx.name))),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    report.services += 1;
    Ok(created.id)
}

async fn ensure_basic_price(db: &DatabaseConnection, service_id: Uuid, report: &mut SeedReport) -> Result<(), ServiceError> {
    let exists = service_price::Entity::find()
        .filter(service_price::Column::ServiceId.eq(service_id))
        .filter(service_price::Column::Name.eq(BASIC_PACKAGE))
        .one(db)
        .await?
        .is_some();
    if exists {
        return Ok(());
    }
    let now = Utc::now().into();
    service_price::ActiveModel {
        id: Set(Uuid::new_v4()),
        service_id: Set(service_id),
        name: Set(BASIC_PACKAGE.to_string()),
        price: Set(BASIC_PRICE),
        discount_amount: Set(BASIC_DISCOUNT),
        is_compulsory: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    report.prices += 1;
    Ok(())
}

/// Load the catalog fixtures, inserting only rows that do not exist yet.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<SeedReport, ServiceError> {
    let mut report = SeedReport::default();

    let mut form_ids = Vec::new();
    for fx in form_fixtures() {
        let id = ensure_form(db, &fx, &mut report).await?;
        form_ids.push((fx.name, id));
    }
    for name in CATEGORIES {
        ensure_category(db, name, &mut report).await?;
    }
    for fx in SERVICES.iter() {
        let form_id = form_ids.iter().find(|(n, _)| *n == fx.form).map(|(_, id)| *id);
        let service_id = ensure_service(db, fx, form_id, &mut report).await?;
        ensure_basic_price(db, service_id, &mut report).await?;
    }

    info!(
        forms = report.forms,
        categories = report.categories,
        services = report.services,
        prices = report.prices,
        "seed_completed"
    );
    Ok(report)
}
