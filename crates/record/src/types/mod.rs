//! Concrete record types
//!
//! One struct per record type, each implementing
//! [`RecordOps`](crate::dispatch::RecordOps). Leaf types hold scalars and
//! strings only and derive `Clone`. Parent types own typed child lists and
//! clone fallibly.

mod activity;
mod address;
mod addressbook;
mod children;
mod company;
mod contact;
mod email;
mod event;
mod extension;
mod group;
mod group_relation;
mod image;
mod messenger;
mod my_profile;
mod name;
mod nickname;
mod note;
mod number;
mod person;
mod phone_log;
mod profile;
mod relationship;
mod result;
mod sdn;
mod simple_contact;
mod speeddial;
mod updated_info;
mod url;

pub use activity::{Activity, ActivityPhoto};
pub use address::Address;
pub use addressbook::Addressbook;
pub use company::Company;
pub use contact::Contact;
pub use email::Email;
pub use event::Event;
pub use extension::Extension;
pub use group::Group;
pub use group_relation::GroupRelation;
pub use image::Image;
pub use messenger::Messenger;
pub use my_profile::MyProfile;
pub use name::Name;
pub use nickname::Nickname;
pub use note::Note;
pub use number::Number;
pub use person::Person;
pub use phone_log::PhoneLog;
pub use profile::Profile;
pub use relationship::Relationship;
pub use result::{QueryResult, ResultValue};
pub use sdn::Sdn;
pub use simple_contact::SimpleContact;
pub use speeddial::SpeedDial;
pub use updated_info::UpdatedInfo;
pub use url::Url;
