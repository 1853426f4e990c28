use serde::{Deserialize, Serialize};

/// Cast and crew for a movie.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CastMember {
    pub name: String,
    pub character: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CrewMember {
    pub name: String,
    pub job: Option<String>,
}

impl Credits {
    /// Names of every crew member credited as "Director", in provider order.
    pub fn directors(&self) -> Vec<&str> {
        self.crew
            .iter()
            .filter(|m| m.job.as_deref() == Some("Director"))
            .map(|m| m.name.as_str())
            .collect()
    }

    /// Names of the first `count` cast members, in provider order.
    pub fn top_cast(&self, count: usize) -> Vec<&str> {
        self.cast
            .iter()
            .take(count)
            .map(|m| m.name.as_str())
            .collect()
    }
}
