use std::fmt;

use crate::domain::{address::Address, email::Email};

/// Attributes every person-like entity carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    email: Email,
    address: Address,
}

impl Person {
    pub fn new(name: impl Into<String>, email: Email, address: Address) -> Self {
        Self {
            name: name.into(),
            email,
            address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// Anything that embeds a [`Person`] and can therefore authenticate.
///
/// Tellers and customers get their sign-in behavior from the shared auth
/// capability; this trait is only the bridge to their identity data.
pub trait Identified: Send + Sync {
    fn person(&self) -> &Person;

    fn email(&self) -> &Email {
        self.person().email()
    }

    fn name(&self) -> &str {
        self.person().name()
    }
}

impl Identified for Person {
    fn person(&self) -> &Person {
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Teller {
    person: Person,
    teller_number: String,
    branch: String,
}

impl Teller {
    pub fn new(person: Person, teller_number: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            person,
            teller_number: teller_number.into(),
            branch: branch.into(),
        }
    }

    pub fn teller_number(&self) -> &str {
        &self.teller_number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }
}

impl Identified for Teller {
    fn person(&self) -> &Person {
        &self.person
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    person: Person,
    customer_number: String,
}

impl Customer {
    pub fn new(person: Person, customer_number: impl Into<String>) -> Self {
        Self {
            person,
            customer_number: customer_number.into(),
        }
    }

    pub fn customer_number(&self) -> &str {
        &self.customer_number
    }
}

impl Identified for Customer {
    fn person(&self) -> &Person {
        &self.person
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Teller,
    Customer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Teller => f.write_str("teller"),
            Role::Customer => f.write_str("customer"),
        }
    }
}

/// An entry of the bank's directory.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    Teller(Teller),
    Customer(Customer),
}

impl Identity {
    pub fn role(&self) -> Role {
        match self {
            Identity::Teller(_) => Role::Teller,
            Identity::Customer(_) => Role::Customer,
        }
    }

    pub fn as_teller(&self) -> Option<&Teller> {
        match self {
            Identity::Teller(teller) => Some(teller),
            Identity::Customer(_) => None,
        }
    }

    pub fn as_customer(&self) -> Option<&Customer> {
        match self {
            Identity::Customer(customer) => Some(customer),
            Identity::Teller(_) => None,
        }
    }
}

impl Identified for Identity {
    fn person(&self) -> &Person {
        match self {
            Identity::Teller(teller) => teller.person(),
            Identity::Customer(customer) => customer.person(),
        }
    }
}

impl From<Teller> for Identity {
    fn from(teller: Teller) -> Self {
        Identity::Teller(teller)
    }
}

impl From<Customer> for Identity {
    fn from(customer: Customer) -> Self {
        Identity::Customer(customer)
    }
}
