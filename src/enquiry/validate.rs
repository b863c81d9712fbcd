use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;

pub const NAME_MIN_CHARS: usize = 3;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{7,15}$").expect("phone pattern is valid"));

/// Programmes offered in the quote form's select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingType {
    Personal,
    Functional,
    WeightLoss,
    MuscleGain,
    Online,
}

impl TrainingType {
    pub const ALL: [TrainingType; 5] = [
        TrainingType::Personal,
        TrainingType::Functional,
        TrainingType::WeightLoss,
        TrainingType::MuscleGain,
        TrainingType::Online,
    ];

    /// Value carried by the `<option>`.
    pub fn value(self) -> &'static str {
        match self {
            TrainingType::Personal => "personalizado",
            TrainingType::Functional => "funcional",
            TrainingType::WeightLoss => "perdida-peso",
            TrainingType::MuscleGain => "masa-muscular",
            TrainingType::Online => "online",
        }
    }

    /// Text shown to the visitor, and embedded in the outgoing message.
    pub fn label(self) -> &'static str {
        match self {
            TrainingType::Personal => "Entrenamiento Personalizado",
            TrainingType::Functional => "Entrenamiento Funcional",
            TrainingType::WeightLoss => "Pérdida de Peso",
            TrainingType::MuscleGain => "Ganancia de Masa Muscular",
            TrainingType::Online => "Entrenamiento Online",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// Form fields that carry a validation rule. The free-text message has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Training,
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::EmptyField("El nombre es obligatorio"))
    } else if value.chars().count() < NAME_MIN_CHARS {
        Err(FieldError::TooShort {
            label: "El nombre",
            min: NAME_MIN_CHARS,
        })
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::EmptyField("El correo electrónico es obligatorio"))
    } else if !EMAIL_RE.is_match(value) {
        Err(FieldError::InvalidFormat("Por favor ingresa un correo válido"))
    } else {
        Ok(())
    }
}

pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::EmptyField("El teléfono es obligatorio"))
    } else if !PHONE_RE.is_match(value) {
        Err(FieldError::InvalidFormat(
            "Por favor ingresa un teléfono válido (solo números, 7-15 dígitos)",
        ))
    } else {
        Ok(())
    }
}

pub fn validate_training(value: &str) -> Result<TrainingType, FieldError> {
    TrainingType::from_value(value).ok_or(FieldError::EmptyField(
        "Por favor selecciona un tipo de entrenamiento",
    ))
}

/// Per-field failures from one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn set(&mut self, field: Field, result: Result<(), FieldError>) {
        match result {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(e) => {
                self.0.insert(field, e);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub training: String,
    pub message: String,
}

/// A quote request that passed validation. Values are kept exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub training: TrainingType,
    pub message: Option<String>,
}

impl FormValues {
    /// Runs the rule for one field, as done on blur/change.
    pub fn check(&self, field: Field) -> Result<(), FieldError> {
        match field {
            Field::Name => validate_name(&self.name),
            Field::Email => validate_email(&self.email),
            Field::Phone => validate_phone(&self.phone),
            Field::Training => validate_training(&self.training).map(|_| ()),
        }
    }

    /// Runs every rule. All failures are reported, not just the first.
    pub fn validate(&self) -> Result<Enquiry, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in [Field::Name, Field::Email, Field::Phone, Field::Training] {
            errors.set(field, self.check(field));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let training = validate_training(&self.training).map_err(|e| {
            let mut errors = FieldErrors::default();
            errors.set(Field::Training, Err(e));
            errors
        })?;

        // rules run on trimmed input, but the enquiry carries what was typed
        Ok(Enquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            training,
            message: (!self.message.is_empty()).then(|| self.message.clone()),
        })
    }
}
