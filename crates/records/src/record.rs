//! The unified delivery record and the dated-record seam.

use planificador_calendar::CalendarDate;

/// A record carrying one or more calendar-date fields.
///
/// `Field` selects which date to read. A missing or unparseable date reads
/// as `None`.
pub trait DatedRecord {
    /// Selector over the record's date fields.
    type Field: Copy;

    /// Returns the date stored in `field`, if present.
    fn date_of(&self, field: Self::Field) -> Option<CalendarDate>;
}

/// Date fields of an [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// The board cell the order belongs to.
    Delivery,
    /// When the client receives the goods.
    Reception,
    /// When the goods are manufactured.
    Manufacturing,
    /// When the truck is loaded.
    Loading,
}

/// One client's plan for one day, independent of the backend it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    /// Store identifier.
    pub id: String,
    /// Client (platform) the order belongs to.
    pub client_id: String,
    /// Client display name, when the backend provides one.
    pub client_name: Option<String>,
    /// Board cell date.
    pub date: Option<CalendarDate>,
    /// Whether anything ships on this cell.
    pub delivers: bool,
    /// When the client receives the goods.
    pub reception_date: Option<CalendarDate>,
    /// Raw reception time, `HH:MM` or `HH:MM:SS`.
    pub reception_time: String,
    /// When the goods are manufactured.
    pub manufacturing_date: Option<CalendarDate>,
    /// Free-text manufacturing notes.
    pub manufacturing_notes: String,
    /// When the truck is loaded; the loading report groups on this.
    pub loading_date: Option<CalendarDate>,
    /// Carrier name; empty when none is assigned.
    pub transport_company: String,
    /// Free-text notes for the carrier.
    pub transport_comments: String,
}

impl Order {
    /// Returns `true` if the order ships and has a carrier assigned.
    pub fn is_loadable(&self) -> bool {
        self.delivers && !self.transport_company.trim().is_empty()
    }
}

impl DatedRecord for Order {
    type Field = DateField;

    fn date_of(&self, field: DateField) -> Option<CalendarDate> {
        match field {
            DateField::Delivery => self.date,
            DateField::Reception => self.reception_date,
            DateField::Manufacturing => self.manufacturing_date,
            DateField::Loading => self.loading_date,
        }
    }
}
