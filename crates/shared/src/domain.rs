use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(PostId);

/// A record shown in a list. Identity is the key; the other fields are for display only.
pub trait ListItem {
    type Key: Clone + Eq;

    fn key(&self) -> Self::Key;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl ListItem for Post {
    type Key = PostId;

    fn key(&self) -> PostId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl ListItem for Player {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }
}
