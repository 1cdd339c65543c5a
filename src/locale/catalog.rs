//! Static string tables for every supported locale

use super::Locale;

/// Keys for every string the service can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Endpoint responses
    SubmissionAccepted,
    MalformedFormData,
    SubmissionFailed,

    // Field violations
    Required,
    ExpectedString,
    ExpectedObject,
    NameTooShort,
    PhoneTooShort,
    EmailInvalid,
    ServiceTypeMissing,
    MessageTooShort,

    // Service categories
    ServiceHomeMoving,
    ServiceOfficeMoving,
    ServiceFurnitureTransport,
    ServiceUrgentDelivery,
    ServiceOther,
}

impl MessageKey {
    /// Every key, in declaration order
    pub const ALL: [MessageKey; 16] = [
        MessageKey::SubmissionAccepted,
        MessageKey::MalformedFormData,
        MessageKey::SubmissionFailed,
        MessageKey::Required,
        MessageKey::ExpectedString,
        MessageKey::ExpectedObject,
        MessageKey::NameTooShort,
        MessageKey::PhoneTooShort,
        MessageKey::EmailInvalid,
        MessageKey::ServiceTypeMissing,
        MessageKey::MessageTooShort,
        MessageKey::ServiceHomeMoving,
        MessageKey::ServiceOfficeMoving,
        MessageKey::ServiceFurnitureTransport,
        MessageKey::ServiceUrgentDelivery,
        MessageKey::ServiceOther,
    ];
}

/// Resolve a message for the given locale.
pub fn text(key: MessageKey, locale: Locale) -> &'static str {
    match locale {
        Locale::Pl => polish(key),
        Locale::En => english(key),
        Locale::Ru => russian(key),
    }
}

fn polish(key: MessageKey) -> &'static str {
    match key {
        MessageKey::SubmissionAccepted => "Dziękujemy za wiadomość! Skontaktujemy się wkrótce.",
        MessageKey::MalformedFormData => "Nieprawidłowe dane formularza",
        MessageKey::SubmissionFailed => "Wystąpił błąd podczas przetwarzania formularza",
        MessageKey::Required => "Pole jest wymagane",
        MessageKey::ExpectedString => "Oczekiwano tekstu, otrzymano",
        MessageKey::ExpectedObject => "Oczekiwano obiektu, otrzymano",
        MessageKey::NameTooShort => "Imię i nazwisko musi mieć co najmniej 2 znaki",
        MessageKey::PhoneTooShort => "Numer telefonu musi mieć co najmniej 9 znaków",
        MessageKey::EmailInvalid => "Proszę podać poprawny adres email",
        MessageKey::ServiceTypeMissing => "Proszę wybrać rodzaj usługi",
        MessageKey::MessageTooShort => "Wiadomość musi mieć co najmniej 10 znaków",
        MessageKey::ServiceHomeMoving => "Przeprowadzka mieszkania",
        MessageKey::ServiceOfficeMoving => "Przeprowadzka biura",
        MessageKey::ServiceFurnitureTransport => "Transport mebli",
        MessageKey::ServiceUrgentDelivery => "Pilna dostawa",
        MessageKey::ServiceOther => "Inne",
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::SubmissionAccepted => "Thank you for your message! We will contact you soon.",
        MessageKey::MalformedFormData => "Invalid form data",
        MessageKey::SubmissionFailed => "An error occurred while processing the form",
        MessageKey::Required => "Required",
        MessageKey::ExpectedString => "Expected string, received",
        MessageKey::ExpectedObject => "Expected object, received",
        MessageKey::NameTooShort => "Full name must be at least 2 characters long",
        MessageKey::PhoneTooShort => "Phone number must be at least 9 characters long",
        MessageKey::EmailInvalid => "Please enter a valid email address",
        MessageKey::ServiceTypeMissing => "Please choose a service type",
        MessageKey::MessageTooShort => "Message must be at least 10 characters long",
        MessageKey::ServiceHomeMoving => "Home moving",
        MessageKey::ServiceOfficeMoving => "Office moving",
        MessageKey::ServiceFurnitureTransport => "Furniture transport",
        MessageKey::ServiceUrgentDelivery => "Urgent delivery",
        MessageKey::ServiceOther => "Other",
    }
}

fn russian(key: MessageKey) -> &'static str {
    match key {
        MessageKey::SubmissionAccepted => "Спасибо за сообщение! Мы свяжемся с вами в ближайшее время.",
        MessageKey::MalformedFormData => "Неверные данные формы",
        MessageKey::SubmissionFailed => "Произошла ошибка при обработке формы",
        MessageKey::Required => "Обязательное поле",
        MessageKey::ExpectedString => "Ожидалась строка, получено",
        MessageKey::ExpectedObject => "Ожидался объект, получено",
        MessageKey::NameTooShort => "Имя и фамилия должны содержать не менее 2 символов",
        MessageKey::PhoneTooShort => "Номер телефона должен содержать не менее 9 символов",
        MessageKey::EmailInvalid => "Пожалуйста, укажите правильный адрес электронной почты",
        MessageKey::ServiceTypeMissing => "Пожалуйста, выберите тип услуги",
        MessageKey::MessageTooShort => "Сообщение должно содержать не менее 10 символов",
        MessageKey::ServiceHomeMoving => "Переезд квартиры",
        MessageKey::ServiceOfficeMoving => "Переезд офиса",
        MessageKey::ServiceFurnitureTransport => "Перевозка мебели",
        MessageKey::ServiceUrgentDelivery => "Срочная доставка",
        MessageKey::ServiceOther => "Другое",
    }
}
