//! Forms of the settings panels.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::settings::{
    CallState, CallStateDraft, CatalogEntry, KnowledgeDocument, KnowledgeDocumentDraft, Location,
    LocationDraft, Priority, PriorityDraft,
};
use crate::domain::types::{
    CallStateName, DocumentName, DocumentPath, HexColor, LocationName, PriorityName,
    SanitizedText,
};
use crate::forms::FormError;

/// Submitted form that creates or updates one catalog entry.
pub trait CatalogForm: DeserializeOwned + Validate {
    type Entry: CatalogEntry;

    fn into_draft(self) -> Result<<Self::Entry as CatalogEntry>::Draft, FormError>;

    /// Runs the declarative checks and then the value object constructors.
    fn into_valid_draft(self) -> Result<<Self::Entry as CatalogEntry>::Draft, FormError> {
        self.validate()?;
        self.into_draft()
    }
}

fn default_color() -> String {
    HexColor::default().as_str().to_string()
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize, Validate)]
pub struct PriorityForm {
    #[validate(length(min = 1, max = 64, message = "El nombre es requerido"))]
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
}

impl CatalogForm for PriorityForm {
    type Entry = Priority;

    fn into_draft(self) -> Result<PriorityDraft, FormError> {
        Ok(PriorityDraft {
            name: PriorityName::new(self.name)?,
            color: HexColor::new(self.color)?,
            description: SanitizedText::new(self.description),
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct CallStateForm {
    #[validate(length(min = 1, max = 64, message = "El nombre es requerido"))]
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
}

impl CatalogForm for CallStateForm {
    type Entry = CallState;

    fn into_draft(self) -> Result<CallStateDraft, FormError> {
        Ok(CallStateDraft {
            name: CallStateName::new(self.name)?,
            color: HexColor::new(self.color)?,
            description: SanitizedText::new(self.description),
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct LocationForm {
    #[validate(length(min = 1, max = 128, message = "El nombre es requerido"))]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl CatalogForm for LocationForm {
    type Entry = Location;

    fn into_draft(self) -> Result<LocationDraft, FormError> {
        Ok(LocationDraft {
            name: LocationName::new(self.name)?,
            address: ammonia::clean(self.address.trim()),
            phone: self.phone.trim().to_string(),
            active: self.active,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct KnowledgeDocumentForm {
    #[validate(length(min = 1, max = 128, message = "El nombre es requerido"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "Debe seleccionar un archivo PDF"))]
    pub pdf_path: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl CatalogForm for KnowledgeDocumentForm {
    type Entry = KnowledgeDocument;

    fn into_draft(self) -> Result<KnowledgeDocumentDraft, FormError> {
        Ok(KnowledgeDocumentDraft {
            name: DocumentName::new(self.name)?,
            description: SanitizedText::new(self.description),
            pdf_path: DocumentPath::new(self.pdf_path)?,
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_required() {
        let form = PriorityForm {
            name: "   ".to_string(),
            color: "#ef4444".to_string(),
            description: String::new(),
        };
        let err = form.into_valid_draft().unwrap_err();
        assert_eq!(err.to_string(), "El nombre es requerido");
    }

    #[test]
    fn empty_name_reports_the_validator_message() {
        let form = CallStateForm {
            name: String::new(),
            color: "#ef4444".to_string(),
            description: String::new(),
        };
        let err = form.into_valid_draft().unwrap_err();
        assert_eq!(err.to_string(), "El nombre es requerido");
    }

    #[test]
    fn description_is_sanitized() {
        let form = PriorityForm {
            name: "Urgente".to_string(),
            color: "#EF4444".to_string(),
            description: "<script>x()</script>Llamar hoy".to_string(),
        };
        let draft = form.into_valid_draft().unwrap();
        assert_eq!(draft.description.as_str(), "Llamar hoy");
        assert_eq!(draft.color.as_str(), "#ef4444");
    }

    #[test]
    fn document_requires_a_pdf() {
        let form = KnowledgeDocumentForm {
            name: "Precios".to_string(),
            description: String::new(),
            pdf_path: "/docs/precios.docx".to_string(),
            active: true,
        };
        let err = form.into_valid_draft().unwrap_err();
        assert_eq!(err.to_string(), "Debe seleccionar un archivo PDF");
    }

    #[test]
    fn location_form_defaults_to_active() {
        let form: LocationForm = serde_html_form::from_str("name=Tunja&address=Centro").unwrap();
        assert!(form.active);
        let draft = form.into_valid_draft().unwrap();
        assert_eq!(draft.name.as_str(), "Tunja");
    }
}
