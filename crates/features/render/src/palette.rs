//! Static class tables for tags and project status badges.

use folio_domain::taxonomy::{ProjectStatus, TagColor};

pub const fn tag_class(color: TagColor) -> &'static str {
    match color {
        TagColor::Blue => "tag tag--blue",
        TagColor::Green => "tag tag--green",
        TagColor::Red => "tag tag--red",
        TagColor::Yellow => "tag tag--yellow",
        TagColor::Purple => "tag tag--purple",
        TagColor::Pink => "tag tag--pink",
        TagColor::Indigo => "tag tag--indigo",
        TagColor::Gray => "tag tag--gray",
    }
}

pub const fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Development => "status status--development",
        ProjectStatus::Maintenance => "status status--maintenance",
        ProjectStatus::Completed => "status status--completed",
    }
}
