//! In-memory table behind the admin list pages.

use thiserror::Error;

use crate::domain::common::{AggregateRoot, HasStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("{entity} #{id} already exists")]
    Duplicate { entity: &'static str, id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable<T> {
    rows: Vec<T>,
}

impl<T> Default for RecordTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: AggregateRoot + Clone> RecordTable<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// New rows go to the top of the list.
    pub fn insert(&mut self, row: T) -> Result<(), RecordError> {
        if self.get(row.id()).is_some() {
            return Err(RecordError::Duplicate {
                entity: T::element_name(),
                id: row.id().to_string(),
            });
        }
        self.rows.insert(0, row);
        Ok(())
    }

    pub fn update(&mut self, row: T) -> Result<(), RecordError> {
        let slot = self.slot(row.id())?;
        *slot = row;
        Ok(())
    }

    pub fn remove(&mut self, id: T::Id) -> Result<T, RecordError> {
        let index = self
            .rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        Ok(self.rows.remove(index))
    }

    /// Rows matching the text query, in table order.
    pub fn filter(&self, query: &str) -> Vec<T> {
        self.rows.iter().filter(|r| r.matches(query)).cloned().collect()
    }

    fn slot(&mut self, id: T::Id) -> Result<&mut T, RecordError> {
        self.rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))
    }
}

impl<T: AggregateRoot<Id = u32> + Clone> RecordTable<T> {
    pub fn next_id(&self) -> u32 {
        self.rows.iter().map(|r| r.id()).max().unwrap_or(0) + 1
    }
}

impl<T: AggregateRoot + HasStatus + Clone> RecordTable<T> {
    pub fn set_status(&mut self, id: T::Id, status: T::Status) -> Result<(), RecordError> {
        self.slot(id)?.set_status(status);
        Ok(())
    }

    /// Text query plus optional status filter.
    pub fn filter_by_status(&self, query: &str, status: Option<T::Status>) -> Vec<T> {
        self.rows
            .iter()
            .filter(|r| status.map_or(true, |s| r.status() == s))
            .filter(|r| r.matches(query))
            .cloned()
            .collect()
    }

    pub fn count_status(&self, status: T::Status) -> usize {
        self.rows.iter().filter(|r| r.status() == status).count()
    }
}

fn not_found<T: AggregateRoot>(id: T::Id) -> RecordError {
    RecordError::NotFound {
        entity: T::element_name(),
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::{self, Customer, CustomerStatus};
    use crate::domain::a006_support_ticket::{self, TicketStatus};

    fn customer(id: u32, name: &str) -> Customer {
        Customer {
            id,
            name: name.into(),
            avatar: Customer::avatar_url(id),
            subscription: CustomerStatus::Trial,
            total_spend: "$0.00".into(),
            last_active: "just now".into(),
            joined: "Nov 28, 2023".into(),
        }
    }

    #[test]
    fn test_insert_puts_row_first_and_rejects_duplicates() {
        let mut table = RecordTable::new(a001_customer::fixtures());
        let id = table.next_id();
        assert_eq!(id, 6);

        table.insert(customer(id, "Anil Kapoor")).unwrap();
        assert_eq!(table.rows()[0].name, "Anil Kapoor");
        assert_eq!(table.len(), 6);

        let err = table.insert(customer(1, "Dup")).unwrap_err();
        assert!(matches!(err, RecordError::Duplicate { .. }));
    }

    #[test]
    fn test_update_and_remove() {
        let mut table = RecordTable::new(a001_customer::fixtures());
        let mut row = table.get(2).cloned().unwrap();
        row.total_spend = "$10.00".into();
        table.update(row).unwrap();
        assert_eq!(table.get(2).unwrap().total_spend, "$10.00");

        let removed = table.remove(3).unwrap();
        assert_eq!(removed.name, "Fatima Khan");
        assert!(table.get(3).is_none());
        assert_eq!(
            table.remove(3).unwrap_err(),
            RecordError::NotFound { entity: "Customer", id: "3".into() }
        );
        assert!(table.update(customer(99, "Ghost")).is_err());
    }

    #[test]
    fn test_status_and_filters() {
        let mut table = RecordTable::new(a006_support_ticket::fixtures());
        table.set_status(1, TicketStatus::Resolved).unwrap();
        assert_eq!(table.get(1).unwrap().status, TicketStatus::Resolved);
        assert_eq!(table.count_status(TicketStatus::Resolved), 2);

        assert_eq!(table.filter("referral").len(), 1);
        assert_eq!(table.filter("").len(), 4);
        assert_eq!(table.filter_by_status("", Some(TicketStatus::Closed)).len(), 1);
        assert!(table.filter_by_status("referral", Some(TicketStatus::Closed)).is_empty());
        assert!(table.set_status(42, TicketStatus::Open).is_err());
    }
}
