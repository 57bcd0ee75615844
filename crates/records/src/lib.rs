//! # planificador-records
//!
//! Dated delivery records for the planner: one backend-neutral [`Order`]
//! type, adapters from the two remote record shapes, stable grouping by any
//! date field, the client x date board index, and the loading report.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["document JSON"] -->|"parse_orders(Document)"| C["Vec of Order"]
//!     B["relational JSON"] -->|"parse_orders(Relational)"| C
//!     H["holiday / plan JSON"] -->|"parse_holidays() / parse_plans()"| R["Holiday, HolidayPlan"]
//!     R --> F
//!     C -->|"filter_visible()"| D["visible orders"]
//!     D -->|"BoardIndex::build()"| E["client x date cells"]
//!     C -->|"load_report()"| F["ReportGroup per loading date"]
//!     C -->|"group_by_date()"| G["DateGroups"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `record` | `DatedRecord` trait, `Order`, `DateField` |
//! | `adapter` | Backend shapes for orders, holidays, and plans; JSON decoding |
//! | `group` | Stable grouping by date |
//! | `board` | Visible-window filter and board index |
//! | `report` | Loading report |
//! | `subscription` | Owner-scoped live-update handles |
//! | `error` | Error types |

mod adapter;
mod board;
mod error;
mod group;
mod record;
mod report;
mod subscription;

pub use adapter::{
    DocumentHoliday, DocumentOrder, DocumentPlan, Platform, RecordSource, RelationalHoliday,
    RelationalOrder, RelationalPlan, parse_holidays, parse_orders, parse_plans,
};
pub use board::{BoardIndex, filter_visible};
pub use error::RecordError;
pub use group::{DateGroups, GroupKey, group_by, group_by_date};
pub use record::{DateField, DatedRecord, Order};
pub use report::{ReportGroup, TransportFilter, load_report};
pub use subscription::{Subscription, SubscriptionScope};
