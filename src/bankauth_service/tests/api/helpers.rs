use std::sync::Arc;

use bankauth_adapters::{AuthSettings, Bank, DashMapCredentialStore, HashMapSessionStore, ManualClock};
use bankauth_core::{Address, Customer, Email, Password, Person, Teller};
use bankauth_service::AuthService;
use fake::{Fake, faker::name::en::Name};

pub type TestService = AuthService<Bank, DashMapCredentialStore, HashMapSessionStore>;

pub struct TestApp {
    pub service: TestService,
    pub clock: ManualClock,
}

impl TestApp {
    pub fn new() -> Self {
        let clock = ManualClock::default();
        let bank = Bank::new(7, "Test Savings & Loan", address());
        let service =
            AuthService::in_memory_with_clock(bank, &AuthSettings::for_tests(), Arc::new(clock.clone()))
                .expect("test settings are valid");
        Self { service, clock }
    }

    pub async fn with_customer(email_raw: &str, password_raw: &str) -> Self {
        let app = Self::new();
        app.service
            .register(customer(email_raw), password(password_raw))
            .await
            .expect("customer registers");
        app
    }
}

pub fn address() -> Address {
    Address::new("221B Baker St", "London", "Greater London", "NW1 6XE", "UK")
}

pub fn email(raw: &str) -> Email {
    Email::try_from(raw).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(raw).unwrap()
}

pub fn person(email_raw: &str) -> Person {
    let name: String = Name().fake();
    Person::new(name, email(email_raw), address())
}

pub fn customer(email_raw: &str) -> Customer {
    Customer::new(person(email_raw), "C-100")
}

pub fn teller(email_raw: &str) -> Teller {
    Teller::new(person(email_raw), "T-7", "Baker Street")
}
