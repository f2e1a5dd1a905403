use std::collections::HashMap;
use std::sync::Arc;

use bankauth_core::{
    Address, Customer, DirectoryError, Email, Identified, Identity, IdentityDirectory, Teller,
};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Teller(usize),
    Customer(usize),
}

/// Tellers and customers in registration order, plus an email index into them.
#[derive(Debug, Default)]
struct Roster {
    tellers: Vec<Teller>,
    customers: Vec<Customer>,
    index: HashMap<Email, Slot>,
}

impl Roster {
    fn get(&self, slot: Slot) -> Identity {
        match slot {
            Slot::Teller(i) => Identity::Teller(self.tellers[i].clone()),
            Slot::Customer(i) => Identity::Customer(self.customers[i].clone()),
        }
    }

    fn take(&mut self, slot: Slot) -> Identity {
        let removed = match slot {
            Slot::Teller(i) => Identity::Teller(self.tellers.remove(i)),
            Slot::Customer(i) => Identity::Customer(self.customers.remove(i)),
        };
        // Positions after the removed one shift down by one.
        for other in self.index.values_mut() {
            match (slot, other) {
                (Slot::Teller(gone), Slot::Teller(i)) if *i > gone => *i -= 1,
                (Slot::Customer(gone), Slot::Customer(i)) if *i > gone => *i -= 1,
                _ => {}
            }
        }
        removed
    }
}

/// The organization aggregate and the directory identities are resolved through.
///
/// Owns its tellers and customers. Credentials and sessions live in their own
/// stores and refer back to identities by email only.
#[derive(Debug, Clone)]
pub struct Bank {
    bank_id: u32,
    name: String,
    address: Address,
    roster: Arc<RwLock<Roster>>,
}

impl Bank {
    pub fn new(bank_id: u32, name: impl Into<String>, address: Address) -> Self {
        Self {
            bank_id,
            name: name.into(),
            address,
            roster: Arc::new(RwLock::new(Roster::default())),
        }
    }

    pub fn bank_id(&self) -> u32 {
        self.bank_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub async fn tellers(&self) -> Vec<Teller> {
        self.roster.read().await.tellers.clone()
    }

    pub async fn customers(&self) -> Vec<Customer> {
        self.roster.read().await.customers.clone()
    }

    pub async fn len(&self) -> usize {
        self.roster.read().await.index.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl IdentityDirectory for Bank {
    #[tracing::instrument(name = "Adding identity to bank", skip_all, fields(bank_id = self.bank_id))]
    async fn add(&self, identity: Identity) -> Result<(), DirectoryError> {
        let mut roster = self.roster.write().await;
        if roster.index.contains_key(identity.email()) {
            return Err(DirectoryError::IdentityAlreadyExists);
        }

        let email = identity.email().clone();
        let slot = match identity {
            Identity::Teller(teller) => {
                roster.tellers.push(teller);
                Slot::Teller(roster.tellers.len() - 1)
            }
            Identity::Customer(customer) => {
                roster.customers.push(customer);
                Slot::Customer(roster.customers.len() - 1)
            }
        };
        roster.index.insert(email, slot);
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Identity, DirectoryError> {
        let roster = self.roster.read().await;
        let slot = roster
            .index
            .get(email)
            .copied()
            .ok_or(DirectoryError::IdentityNotFound)?;
        Ok(roster.get(slot))
    }

    #[tracing::instrument(name = "Removing identity from bank", skip_all, fields(bank_id = self.bank_id))]
    async fn remove(&self, email: &Email) -> Result<Identity, DirectoryError> {
        let mut roster = self.roster.write().await;
        let slot = roster
            .index
            .remove(email)
            .ok_or(DirectoryError::IdentityNotFound)?;
        Ok(roster.take(slot))
    }
}
