use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DonationId, PersonId, RequestId};

/// The kind of ledger record. Used for keyspace routing and error context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Person,
    Request,
    Donation,
    Index,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person => write!(f, "person"),
            Self::Request => write!(f, "request"),
            Self::Donation => write!(f, "donation"),
            Self::Index => write!(f, "request index"),
        }
    }
}

/// An identity known to the ledger.
///
/// A person is created lazily the first time the identity authors a request
/// or makes a donation, and is never deleted. The `id` doubles as the
/// display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    /// Request ids this person authored, in creation order.
    #[serde(rename = "myRequests")]
    pub my_requests: Vec<RequestId>,
    /// Donation ids this person made, in creation order.
    #[serde(rename = "myDonations")]
    pub my_donations: Vec<DonationId>,
}

impl Person {
    /// A fresh person with empty request and donation sequences.
    pub fn new(id: impl Into<PersonId>) -> Self {
        Self {
            id: id.into(),
            my_requests: Vec::new(),
            my_donations: Vec::new(),
        }
    }
}

/// A funding request.
///
/// Created once, then mutated only by donations: each donation increments
/// `current_money` and appends to `donation_list`. Never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,
    /// Owning person id. Defaults to empty when decoding requests stored
    /// before the author field existed.
    #[serde(default)]
    pub who: PersonId,
    pub name: String,
    pub description: String,
    /// Target amount. Non-negative.
    #[serde(rename = "expectedMoney")]
    pub expected_money: i64,
    /// Running total of donated money. Starts at zero.
    #[serde(rename = "currentMoney")]
    pub current_money: i64,
    /// Donation ids against this request, in arrival order.
    #[serde(rename = "donationList")]
    pub donation_list: Vec<DonationId>,
}

impl Request {
    /// A fresh request with no donations.
    pub fn new(
        id: impl Into<RequestId>,
        who: impl Into<PersonId>,
        name: impl Into<String>,
        description: impl Into<String>,
        expected_money: i64,
    ) -> Self {
        Self {
            id: id.into(),
            who: who.into(),
            name: name.into(),
            description: description.into(),
            expected_money,
            current_money: 0,
            donation_list: Vec::new(),
        }
    }

    /// Record a donation against this request.
    ///
    /// The same mutation is applied to the canonical request and to the
    /// index mirror's copy, which keeps the two observationally equal.
    ///
    /// Returns `false` and leaves the record untouched if the new running
    /// total would overflow.
    pub fn apply_donation(&mut self, donation_id: &str, money: i64) -> bool {
        match self.current_money.checked_add(money) {
            Some(total) => {
                self.current_money = total;
                self.donation_list.push(donation_id.to_string());
                true
            }
            None => false,
        }
    }
}

/// A single donation. Immutable once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub id: DonationId,
    /// Donor person id.
    pub who: PersonId,
    /// Target request id.
    pub rid: RequestId,
    /// Donated amount. Positive.
    pub money: i64,
}

impl Donation {
    pub fn new(
        id: impl Into<DonationId>,
        who: impl Into<PersonId>,
        rid: impl Into<RequestId>,
        money: i64,
    ) -> Self {
        Self {
            id: id.into(),
            who: who.into(),
            rid: rid.into(),
            money,
        }
    }
}

/// The denormalized mirror of all requests ever created.
///
/// Exactly one instance exists, created at ledger initialization. Whenever a
/// canonical request changes, the mirror's copy must be updated to match.
/// Serializes as a bare JSON array of requests for compatibility with
/// previously stored index data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestIndex {
    pub requests: Vec<Request>,
}

impl RequestIndex {
    /// An empty index, as written at initialization.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of mirrored requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Append a snapshot of a newly created request.
    pub fn push(&mut self, request: Request) {
        self.requests.push(request);
    }

    /// Find the mirrored entry for a request id. Exact match on id.
    pub fn find(&self, id: &str) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Mutable access to the mirrored entry for a request id.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Request> {
        self.requests.iter_mut().find(|r| r.id == id)
    }
}
