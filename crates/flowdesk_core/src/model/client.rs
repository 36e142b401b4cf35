//! Client records.

use super::{merge_field, Identified};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Lead,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Primary contact person.
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: String,
    pub status: ClientStatus,
    /// Relationship start date (`YYYY-MM-DD`).
    pub since: String,
    pub total_revenue: f64,
    pub avatar: String,
    pub notes: String,
}

impl Identified for Client {
    const ID_PREFIX: &'static str = "client";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Every client field except `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: String,
    pub status: ClientStatus,
    pub since: String,
    pub total_revenue: f64,
    pub avatar: String,
    pub notes: String,
}

impl ClientDraft {
    pub(crate) fn into_client(self, id: String) -> Client {
        Client {
            id,
            name: self.name,
            contact: self.contact,
            email: self.email,
            phone: self.phone,
            company: self.company,
            industry: self.industry,
            status: self.status,
            since: self.since,
            total_revenue: self.total_revenue,
            avatar: self.avatar,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub status: Option<ClientStatus>,
    pub since: Option<String>,
    pub total_revenue: Option<f64>,
    pub avatar: Option<String>,
    pub notes: Option<String>,
}

impl ClientPatch {
    pub fn apply_to(self, client: &mut Client) {
        merge_field(&mut client.name, self.name);
        merge_field(&mut client.contact, self.contact);
        merge_field(&mut client.email, self.email);
        merge_field(&mut client.phone, self.phone);
        merge_field(&mut client.company, self.company);
        merge_field(&mut client.industry, self.industry);
        merge_field(&mut client.status, self.status);
        merge_field(&mut client.since, self.since);
        merge_field(&mut client.total_revenue, self.total_revenue);
        merge_field(&mut client.avatar, self.avatar);
        merge_field(&mut client.notes, self.notes);
    }
}
