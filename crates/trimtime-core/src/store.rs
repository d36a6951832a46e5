//! In-memory booking store.
//!
//! `BookingStore` owns the customer collection, the appointment list, and
//! the shop's reference data. It is constructed once per process and handed
//! by reference to whatever drives it; every operation is synchronous and
//! mutates in place.
//!
//! Slot exclusivity (at most one appointment per date and time) holds
//! structurally: a booking can only pick from [`BookingStore::available_slots`].

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use trimtime_types::appointment::{Appointment, AppointmentRecord, BookingRequest, CancelOutcome};
use trimtime_types::config::ShopConfig;
use trimtime_types::customer::Customer;
use trimtime_types::error::BookingError;
use trimtime_types::service::Service;

use crate::validate::{format_date, is_valid_date, is_valid_datetime, is_valid_phone, normalize_name};

/// Outcome of resolving the customer half of a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResolvedCustomer {
    /// Not on file yet; inserted once the rest of the booking validates.
    New(Customer),
    /// Already on file (only when returning customers are allowed).
    Existing(Customer),
}

impl ResolvedCustomer {
    fn customer(&self) -> &Customer {
        match self {
            ResolvedCustomer::New(c) | ResolvedCustomer::Existing(c) => c,
        }
    }
}

/// The shop's customers and appointments for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct BookingStore {
    config: ShopConfig,
    /// Insertion order is the canonical order for searches.
    customers: Vec<Customer>,
    by_phone: HashMap<String, usize>,
    appointments: Vec<Appointment>,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new(ShopConfig::default())
    }
}

impl BookingStore {
    /// Create an empty store over the given reference data.
    ///
    /// The config is expected to have passed [`ShopConfig::validate`].
    pub fn new(config: ShopConfig) -> Self {
        Self {
            config,
            customers: Vec::new(),
            by_phone: HashMap::new(),
            appointments: Vec::new(),
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn services(&self) -> &[Service] {
        &self.config.services
    }

    pub fn staff(&self) -> &[String] {
        &self.config.staff
    }

    pub fn slots(&self) -> &[String] {
        &self.config.slots
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn find_customer(&self, phone: &str) -> Option<&Customer> {
        self.by_phone.get(phone).map(|&idx| &self.customers[idx])
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// Validate a name and phone and decide whether they name a new customer.
    ///
    /// Shared by [`add_customer`](Self::add_customer) and
    /// [`book_appointment`](Self::book_appointment). Never mutates.
    fn resolve_customer(
        &self,
        name: &str,
        phone: &str,
        allow_existing: bool,
    ) -> Result<ResolvedCustomer, BookingError> {
        let name = normalize_name(name).ok_or(BookingError::InvalidName)?;
        if !is_valid_phone(phone) {
            return Err(BookingError::InvalidPhone);
        }

        match self.find_customer(phone) {
            Some(existing) if allow_existing => {
                if existing.name != name {
                    debug!(
                        phone,
                        stored = %existing.name,
                        given = %name,
                        "returning customer booked under a different name, keeping stored name"
                    );
                }
                Ok(ResolvedCustomer::Existing(existing.clone()))
            }
            Some(_) => Err(BookingError::DuplicateCustomer(phone.to_string())),
            None => Ok(ResolvedCustomer::New(Customer {
                phone: phone.to_string(),
                name,
            })),
        }
    }

    fn insert_customer(&mut self, customer: Customer) {
        info!(phone = %customer.phone, name = %customer.name, "customer added");
        self.by_phone
            .insert(customer.phone.clone(), self.customers.len());
        self.customers.push(customer);
    }

    /// Register a new customer.
    ///
    /// Fails with `InvalidName`, `InvalidPhone`, or `DuplicateCustomer`
    /// regardless of the returning-customer policy.
    pub fn add_customer(&mut self, name: &str, phone: &str) -> Result<Customer, BookingError> {
        match self.resolve_customer(name, phone, false)? {
            ResolvedCustomer::New(customer) => {
                self.insert_customer(customer.clone());
                Ok(customer)
            }
            ResolvedCustomer::Existing(_) => Err(BookingError::DuplicateCustomer(phone.to_string())),
        }
    }

    /// Run the customer checks a booking would run, without booking.
    ///
    /// Lets an interactive driver reject a bad name or a known phone before
    /// asking for the rest of the booking.
    pub fn check_customer(&self, name: &str, phone: &str) -> Result<(), BookingError> {
        self.resolve_customer(name, phone, self.config.allow_returning_customers)
            .map(|_| ())
    }

    /// Reformat a raw `YYYYMMDD` entry, rejecting impossible dates in strict
    /// mode.
    pub fn normalize_date(&self, raw: &str) -> Result<String, BookingError> {
        let date = format_date(raw);
        if self.config.strict_dates && !is_valid_date(&date) {
            return Err(BookingError::InvalidDate(raw.to_string()));
        }
        Ok(date)
    }

    /// Canonical slots not yet booked on `date`, in canonical order.
    pub fn available_slots(&self, date: &str) -> Vec<String> {
        let taken: HashSet<&str> = self
            .appointments
            .iter()
            .filter(|a| a.date == date)
            .map(|a| a.time.as_str())
            .collect();

        self.config
            .slots
            .iter()
            .filter(|slot| !taken.contains(slot.as_str()))
            .cloned()
            .collect()
    }

    /// Book an appointment in one step.
    ///
    /// `request.date` is the raw `YYYYMMDD` entry. Checks run in order:
    /// customer (name, phone, duplicate), slot (none left, out of range),
    /// calendar validity in strict mode, service, staff. Nothing is stored
    /// unless every check passes.
    pub fn book_appointment(&mut self, request: &BookingRequest) -> Result<Appointment, BookingError> {
        let resolved = self.resolve_customer(
            &request.name,
            &request.phone,
            self.config.allow_returning_customers,
        )?;

        let date = format_date(&request.date);
        let available = self.available_slots(&date);
        if available.is_empty() {
            return Err(BookingError::NoAvailableSlots(date));
        }
        let time = request
            .slot_choice
            .checked_sub(1)
            .and_then(|idx| available.get(idx))
            .ok_or(BookingError::InvalidSlot)?
            .clone();

        if self.config.strict_dates && !is_valid_datetime(&date, &time) {
            return Err(BookingError::InvalidDate(request.date.clone()));
        }

        let service = self
            .config
            .service(&request.service_id)
            .ok_or_else(|| BookingError::InvalidService(request.service_id.clone()))?;

        let staff_name = request
            .staff_choice
            .checked_sub(1)
            .and_then(|idx| self.config.staff.get(idx))
            .ok_or(BookingError::InvalidStaff)?;

        let appointment = Appointment {
            customer_phone: resolved.customer().phone.clone(),
            date,
            time,
            service_name: service.name.clone(),
            price_cents: service.price_cents,
            staff_name: staff_name.clone(),
        };

        if let ResolvedCustomer::New(customer) = resolved {
            self.insert_customer(customer);
        }

        info!(
            phone = %appointment.customer_phone,
            date = %appointment.date,
            time = %appointment.time,
            service = %appointment.service_name,
            staff = %appointment.staff_name,
            "appointment booked"
        );
        self.appointments.push(appointment.clone());

        Ok(appointment)
    }

    fn record(&self, appointment: &Appointment) -> Option<AppointmentRecord> {
        self.find_customer(&appointment.customer_phone)
            .map(|customer| AppointmentRecord {
                customer: customer.clone(),
                appointment: appointment.clone(),
            })
    }

    /// All appointments in booking order, joined with their customers.
    pub fn list_appointments(&self) -> Vec<AppointmentRecord> {
        self.appointments
            .iter()
            .filter_map(|a| self.record(a))
            .collect()
    }

    /// Customers whose name contains `query`, ignoring case, in insertion
    /// order.
    pub fn search_by_name(&self, query: &str) -> Vec<Customer> {
        let matches: Vec<Customer> = self
            .customers
            .iter()
            .filter(|c| c.name_matches(query))
            .cloned()
            .collect();
        debug!(query, matches = matches.len(), "customer search");
        matches
    }

    /// Find the first appointment (booking order) whose customer name
    /// contains `query`, ignoring case.
    ///
    /// Nothing changes until the returned [`PendingCancellation`] is
    /// confirmed. Dropping or declining it leaves the appointment in place.
    pub fn cancel_appointment(&mut self, query: &str) -> Result<PendingCancellation<'_>, BookingError> {
        let found = self.appointments.iter().enumerate().find_map(|(idx, a)| {
            self.record(a)
                .filter(|r| r.customer.name_matches(query))
                .map(|r| (idx, r))
        });

        match found {
            Some((index, record)) => Ok(PendingCancellation {
                store: self,
                index,
                record,
            }),
            None => {
                debug!(query, "no appointment matched cancellation query");
                Err(BookingError::NotFound(query.to_string()))
            }
        }
    }
}

/// A matched appointment awaiting the user's decision.
///
/// Holds the store mutably, so the match cannot go stale before it is
/// resolved.
#[derive(Debug)]
pub struct PendingCancellation<'a> {
    store: &'a mut BookingStore,
    index: usize,
    record: AppointmentRecord,
}

impl PendingCancellation<'_> {
    /// The appointment that would be cancelled.
    pub fn record(&self) -> &AppointmentRecord {
        &self.record
    }

    /// Apply the user's answer.
    pub fn resolve(self, confirmed: bool) -> CancelOutcome {
        if !confirmed {
            debug!(phone = %self.record.customer.phone, "cancellation declined");
            return CancelOutcome::Kept(self.record);
        }

        self.store.appointments.remove(self.index);
        info!(
            phone = %self.record.customer.phone,
            date = %self.record.appointment.date,
            time = %self.record.appointment.time,
            "appointment cancelled"
        );
        CancelOutcome::Cancelled(self.record)
    }

    pub fn confirm(self) -> CancelOutcome {
        self.resolve(true)
    }

    pub fn decline(self) -> CancelOutcome {
        self.resolve(false)
    }
}
