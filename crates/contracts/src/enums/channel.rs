use serde::{Deserialize, Serialize};

/// Sales channels a category can be linked to. Wire ids are fixed by the
/// backend; Mercado Livre is the only channel served today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    MercadoLivre,
}

impl Channel {
    /// Backend id of the channel
    pub fn id(&self) -> i32 {
        match self {
            Channel::MercadoLivre => 1,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::MercadoLivre => "Mercado Livre",
        }
    }

    /// Short description shown on the channel picker
    pub fn description(&self) -> &'static str {
        match self {
            Channel::MercadoLivre => "Link this category to the Mercado Livre category tree",
        }
    }

    /// All channels, in picker order
    pub fn all() -> Vec<Channel> {
        vec![Channel::MercadoLivre]
    }

    /// Parse from a backend id
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Channel::MercadoLivre),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for channel in Channel::all() {
            assert_eq!(Channel::from_id(channel.id()), Some(channel));
        }
        assert_eq!(Channel::from_id(0), None);
    }

    #[test]
    fn mercado_livre_uses_backend_id_one() {
        assert_eq!(Channel::MercadoLivre.id(), 1);
    }
}
