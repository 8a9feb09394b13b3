/// The named entry points a transport can invoke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `createRequest(who, name, description, expectedMoney)`
    CreateRequest,
    /// `createDonation(from, rid, money)`
    CreateDonation,
    /// `read(key)`
    Read,
}

impl Operation {
    /// Resolve a wire operation name. Names are exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "createRequest" => Some(Self::CreateRequest),
            "createDonation" => Some(Self::CreateDonation),
            "read" => Some(Self::Read),
            _ => None,
        }
    }

    /// The wire name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateRequest => "createRequest",
            Self::CreateDonation => "createDonation",
            Self::Read => "read",
        }
    }

    /// Number of string arguments the operation takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::CreateRequest => 4,
            Self::CreateDonation => 3,
            Self::Read => 1,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
