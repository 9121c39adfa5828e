//! Contact inquiry turned into a pre-filled e-mail draft.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactMethod {
    #[default]
    Email,
    Call,
}

pub const TIME_SLOTS: [&str; 5] = [
    "7:00 - 8:00",
    "8:00 - 11:30",
    "11:30 - 13:30",
    "13:30 - 16:00",
    "po 16:00",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SERVICE_OPTIONS: [ServiceOption; 8] = [
    ServiceOption { id: "elektrina-plyn", label: "Najnižšia cena elektriny a plynu" },
    ServiceOption { id: "distribucne-parametre", label: "Správne nastavenie distribučných parametrov" },
    ServiceOption { id: "prebytky", label: "Riešenie na prebytky vyrobenej elektriny" },
    ServiceOption { id: "hvac-fv", label: "Vykurovanie, chladenie a fotovoltika" },
    ServiceOption { id: "audity", label: "ESG, BREEM, LEED, účelový a energetický audit" },
    ServiceOption { id: "posudok", label: "Energetický posudok" },
    ServiceOption { id: "home-prebytky", label: "Domácnosti – prebytky" },
    ServiceOption { id: "home-hvac-fv", label: "Domácnosti – kúrenie/chladenie/fotovoltika" },
];

pub const SUBJECT: &str = "Dopyt z webu – Karel Energy";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Vyplňte meno a priezvisko.")]
    MissingName,
    #[error("Vyplňte e-mail.")]
    MissingEmail,
    #[error("E-mailová adresa „{0}“ nie je platná.")]
    InvalidEmail(String),
    #[error("Vyplňte telefónne číslo.")]
    MissingPhone,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub method: ContactMethod,
    /// Empty when no slot was picked.
    pub time_slot: String,
    /// Ids from `SERVICE_OPTIONS`.
    pub services: Vec<&'static str>,
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
}

impl ContactRequest {
    pub fn toggle_service(&mut self, id: &'static str) {
        if let Some(pos) = self.services.iter().position(|s| *s == id) {
            self.services.remove(pos);
        } else {
            self.services.push(id);
        }
    }

    pub fn has_service(&self, id: &str) -> bool {
        self.services.iter().any(|s| *s == id)
    }

    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ContactFormError::InvalidEmail(email.to_string()));
        }
        if self.phone.trim().is_empty() {
            return Err(ContactFormError::MissingPhone);
        }
        Ok(())
    }

    fn contact_line(&self) -> String {
        match self.method {
            ContactMethod::Call => {
                let slot = if self.time_slot.is_empty() {
                    "preferovaný čas neuvedený"
                } else {
                    self.time_slot.as_str()
                };
                format!("Preferovaný spôsob: Zavolať ({})", slot)
            }
            ContactMethod::Email => "Preferovaný spôsob: Napísať e-mail".to_string(),
        }
    }

    pub fn body(&self) -> String {
        // listed in offer order, not click order
        let labels: Vec<&str> = SERVICE_OPTIONS
            .iter()
            .filter(|o| self.has_service(o.id))
            .map(|o| o.label)
            .collect();
        let services = if labels.is_empty() {
            "neuvedené".to_string()
        } else {
            labels.join(", ")
        };
        let message = if self.message.is_empty() {
            "(bez správy)"
        } else {
            self.message.as_str()
        };

        [
            format!("Meno: {}", self.name),
            format!("Email: {}", self.email),
            format!("Telefón: {}", self.phone),
            self.contact_line(),
            format!("Služby: {}", services),
            String::new(),
            "Správa:".to_string(),
            message.to_string(),
        ]
        .join("\n")
    }

    pub fn mailto(&self, to: &str) -> Result<String, ContactFormError> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(SUBJECT),
            urlencoding::encode(&self.body())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Jana Nováková".to_string(),
            email: "jana@obec.sk".to_string(),
            phone: "+421 900 123 456".to_string(),
            ..ContactRequest::default()
        }
    }

    #[test]
    fn minimal_email_request_body() {
        assert_eq!(
            filled().body(),
            "Meno: Jana Nováková\n\
             Email: jana@obec.sk\n\
             Telefón: +421 900 123 456\n\
             Preferovaný spôsob: Napísať e-mail\n\
             Služby: neuvedené\n\
             \n\
             Správa:\n\
             (bez správy)"
        );
    }

    #[test]
    fn call_without_slot_says_so() {
        let mut request = filled();
        request.method = ContactMethod::Call;
        assert!(request
            .body()
            .contains("Preferovaný spôsob: Zavolať (preferovaný čas neuvedený)"));

        request.time_slot = TIME_SLOTS[4].to_string();
        assert!(request.body().contains("Preferovaný spôsob: Zavolať (po 16:00)"));
    }

    #[test]
    fn services_follow_offer_order() {
        let mut request = filled();
        request.toggle_service("posudok");
        request.toggle_service("elektrina-plyn");
        request.toggle_service("audity");
        request.toggle_service("audity");
        request.message = "Zavolajte poobede.".to_string();

        let body = request.body();
        assert!(body.contains(
            "Služby: Najnižšia cena elektriny a plynu, Energetický posudok\n"
        ));
        assert!(body.ends_with("Správa:\nZavolajte poobede."));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        assert_eq!(ContactRequest::default().validate(), Err(ContactFormError::MissingName));

        let mut request = filled();
        request.email = "  ".to_string();
        assert_eq!(request.validate(), Err(ContactFormError::MissingEmail));

        request.email = "jana@obec".to_string();
        assert_eq!(
            request.validate(),
            Err(ContactFormError::InvalidEmail("jana@obec".to_string()))
        );

        request.email = "jana@obec.sk".to_string();
        request.phone = String::new();
        assert_eq!(request.validate(), Err(ContactFormError::MissingPhone));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(is_plausible_email("a@b.sk"));
        assert!(!is_plausible_email("@b.sk"));
        assert!(!is_plausible_email("a@@b.sk"));
        assert!(!is_plausible_email("a@.sk"));
        assert!(!is_plausible_email("a b@c.sk"));
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let href = filled().mailto("info@karel-energy.sk").unwrap();

        assert!(href.starts_with(
            "mailto:info@karel-energy.sk?subject=Dopyt%20z%20webu%20%E2%80%93%20Karel%20Energy&body="
        ));
        assert!(href.contains("Meno%3A%20Jana%20Nov%C3%A1kov%C3%A1%0AEmail"));
        assert!(!href.contains('\n'));
    }

    #[test]
    fn mailto_refuses_invalid_request() {
        assert_eq!(
            ContactRequest::default().mailto("info@karel-energy.sk"),
            Err(ContactFormError::MissingName)
        );
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            ContactFormError::InvalidEmail("x".to_string()).to_string(),
            "E-mailová adresa „x“ nie je platná."
        );
    }
}
