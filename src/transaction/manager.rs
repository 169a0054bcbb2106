//! The in-memory owner of the transactions and the state of the transaction form.

use crate::Error;

use super::{
    core::{Transaction, TransactionId, seed_transactions},
    validation::{TransactionForm, ValidationErrors, validate},
};

/// Whether the transaction form is shown, and what it is being used for.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    /// The form is hidden.
    #[default]
    Closed,
    /// The form is open with empty fields for a new transaction.
    Adding,
    /// The form is open and pre-filled with the transaction being edited.
    Editing(Transaction),
}

/// The effect of a successful [TransactionManager::submit].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// A new transaction was appended with this ID.
    Created(TransactionId),
    /// The transaction with this ID had its fields replaced.
    Updated(TransactionId),
    /// The transaction being edited was deleted before the form was
    /// submitted, so nothing changed.
    EditTargetMissing(TransactionId),
    /// The form was not open, e.g. a stale dialog was submitted after the
    /// form had already been closed, so nothing changed.
    FormClosed,
}

/// Owns the list of transactions and the add/edit/delete flow of the form.
///
/// IDs are handed out by a counter that only ever increases, so a deleted
/// transaction's ID is never reused.
#[derive(Debug, Clone)]
pub struct TransactionManager {
    transactions: Vec<Transaction>,
    form_state: FormState,
    next_id: TransactionId,
}

impl Default for TransactionManager {
    /// A manager holding the placeholder transactions.
    fn default() -> Self {
        Self::new(seed_transactions())
    }
}

impl TransactionManager {
    /// Create a manager holding `transactions`, in order, with the form closed.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let next_id = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            transactions,
            form_state: FormState::Closed,
            next_id,
        }
    }

    /// The transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transaction with `id`, if there is one.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// The number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether there are no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Whether the form is open, and in which mode.
    pub fn form_state(&self) -> &FormState {
        &self.form_state
    }

    /// The transaction loaded into the form, or `None` in "add" mode or when
    /// the form is closed.
    pub fn editing_transaction(&self) -> Option<&Transaction> {
        match &self.form_state {
            FormState::Editing(transaction) => Some(transaction),
            _ => None,
        }
    }

    /// Open the form with empty fields, dropping any abandoned edit.
    pub fn open_add_form(&mut self) {
        self.form_state = FormState::Adding;
    }

    /// Open the form pre-filled with the transaction with `id` and make it the
    /// edit target.
    ///
    /// # Errors
    ///
    /// Returns [Error::NotFound] if there is no transaction with `id`. The
    /// form state is left unchanged.
    pub fn open_edit_form(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let transaction = self.get(id).cloned().ok_or(Error::NotFound)?;
        self.form_state = FormState::Editing(transaction.clone());

        Ok(transaction)
    }

    /// Close the form without submitting it, dropping any edit target.
    pub fn close_form(&mut self) {
        self.form_state = FormState::Closed;
    }

    /// Validate `form` and apply it.
    ///
    /// With an edit target the matching transaction's fields are replaced and
    /// its ID is kept. With the add form open a new transaction is appended.
    /// Either way the form is closed. If the form is already closed nothing
    /// is added and [Submitted::FormClosed] is returned.
    ///
    /// # Errors
    ///
    /// Returns the [ValidationErrors] if `form` is invalid. Nothing changes:
    /// the transactions, the form state and the edit target stay as they were.
    pub fn submit(&mut self, form: &TransactionForm) -> Result<Submitted, ValidationErrors> {
        let new_transaction = validate(form)?;

        let submitted = match std::mem::take(&mut self.form_state) {
            FormState::Editing(target) => {
                match self
                    .transactions
                    .iter_mut()
                    .find(|transaction| transaction.id == target.id)
                {
                    Some(transaction) => {
                        *transaction = new_transaction.into_transaction(target.id);
                        Submitted::Updated(target.id)
                    }
                    None => Submitted::EditTargetMissing(target.id),
                }
            }
            FormState::Adding => {
                let id = self.next_id;
                self.next_id += 1;
                self.transactions.push(new_transaction.into_transaction(id));
                Submitted::Created(id)
            }
            FormState::Closed => Submitted::FormClosed,
        };

        Ok(submitted)
    }

    /// Remove the transaction with `id`.
    ///
    /// Returns `false`, leaving everything unchanged, if there is no such
    /// transaction.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let Some(index) = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
        else {
            return false;
        };

        self.transactions.remove(index);
        true
    }
}
