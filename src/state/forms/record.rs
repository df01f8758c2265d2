//! The prospect record sent to the backend

use super::field::FieldId;
use serde::{Deserialize, Serialize};

/// Eleven string fields, all present at all times.
///
/// Numeric-looking fields are kept as the text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub nom_prenom: String,
    pub email: String,
    pub mobile: String,
    pub source: String,
    pub annee_du_bac: String,
    pub specialite: String,
    pub moyenne_generale: String,
    pub note_maths: String,
    pub note_physique: String,
    pub note_francais: String,
    pub programme: String,
}

impl FormRecord {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.nom_prenom,
            FieldId::Email => &self.email,
            FieldId::Mobile => &self.mobile,
            FieldId::Source => &self.source,
            FieldId::GraduationYear => &self.annee_du_bac,
            FieldId::Specialty => &self.specialite,
            FieldId::OverallAverage => &self.moyenne_generale,
            FieldId::MathGrade => &self.note_maths,
            FieldId::PhysicsGrade => &self.note_physique,
            FieldId::FrenchGrade => &self.note_francais,
            FieldId::Program => &self.programme,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FullName => &mut self.nom_prenom,
            FieldId::Email => &mut self.email,
            FieldId::Mobile => &mut self.mobile,
            FieldId::Source => &mut self.source,
            FieldId::GraduationYear => &mut self.annee_du_bac,
            FieldId::Specialty => &mut self.specialite,
            FieldId::OverallAverage => &mut self.moyenne_generale,
            FieldId::MathGrade => &mut self.note_maths,
            FieldId::PhysicsGrade => &mut self.note_physique,
            FieldId::FrenchGrade => &mut self.note_francais,
            FieldId::Program => &mut self.programme,
        }
    }

    /// Replace one field's value verbatim
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Copy of this record with one field replaced
    pub fn with_field(&self, field: FieldId, value: impl Into<String>) -> FormRecord {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Number of fields holding a non-empty value
    pub fn filled_count(&self) -> usize {
        FieldId::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .count()
    }
}
