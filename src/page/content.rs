//! Portfolio content model
//!
//! Everything the page displays is fixed at startup: the role catalog the
//! identity word rotates through, project cards, skill levels, and contact
//! links. Content is validated once before the terminal is taken over; a bad
//! profile is a configuration error, not something to recover from mid-run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filter value that shows every finished project regardless of category.
pub const FILTER_ALL: &str = "all";

/// Error type for content validation.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("role catalog is empty")]
    EmptyRoleCatalog,
    #[error("role catalog has {roles} roles but {descriptions} descriptions")]
    DescriptionCountMismatch { roles: usize, descriptions: usize },
    #[error("article rule names unknown role: {0}")]
    UnknownArticleRole(String),
    #[error("project {title:?} has category {category:?} which is not a role")]
    UnknownProjectCategory { title: String, category: String },
    #[error("skill {name:?} has level {level}, max is 100")]
    SkillLevelOutOfRange { name: String, level: u8 },
}

/// Ordered list of identity roles, their one-line descriptions, and the
/// subset of role names that take "an" instead of "a".
///
/// Roles and descriptions are parallel collections indexed identically.
/// Immutable for the life of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCatalog {
    roles: Vec<String>,
    descriptions: Vec<String>,
    needs_an: Vec<String>,
}

impl RoleCatalog {
    pub fn new(
        roles: Vec<impl Into<String>>,
        descriptions: Vec<impl Into<String>>,
        needs_an: Vec<impl Into<String>>,
    ) -> Self {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            descriptions: descriptions.into_iter().map(Into::into).collect(),
            needs_an: needs_an.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Role name at `index`.
    pub fn role(&self, index: usize) -> &str {
        &self.roles[index]
    }

    /// Description paired with the role at `index`.
    pub fn description(&self, index: usize) -> &str {
        &self.descriptions[index]
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Whether the role at `index` takes the article "an".
    pub fn takes_an(&self, index: usize) -> bool {
        self.needs_an.iter().any(|name| name == &self.roles[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.iter().any(|role| role == name)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.roles.is_empty() {
            return Err(ContentError::EmptyRoleCatalog);
        }
        if self.roles.len() != self.descriptions.len() {
            return Err(ContentError::DescriptionCountMismatch {
                roles: self.roles.len(),
                descriptions: self.descriptions.len(),
            });
        }
        for name in &self.needs_an {
            if !self.contains(name) {
                return Err(ContentError::UnknownArticleRole(name.clone()));
            }
        }
        Ok(())
    }
}

/// A single project card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub blurb: String,
    /// Matches one of the catalog's role names.
    pub category: String,
    /// Placeholder card, only shown when its category is filtered directly.
    pub coming_soon: bool,
}

impl Project {
    pub fn new(title: &str, blurb: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            blurb: blurb.to_string(),
            category: category.to_string(),
            coming_soon: false,
        }
    }

    pub fn coming_soon(title: &str, blurb: &str, category: &str) -> Self {
        Self {
            coming_soon: true,
            ..Self::new(title, blurb, category)
        }
    }
}

/// A skill with a proficiency level from 0 to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    pub fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            level: level.min(100),
        }
    }
}

/// A labeled contact link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
}

impl ContactLink {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Complete portfolio content, fixed for the life of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub roles: RoleCatalog,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub contacts: Vec<ContactLink>,
}

impl Profile {
    /// Check the cross-references the page relies on. Called once at startup.
    pub fn validate(&self) -> Result<(), ContentError> {
        self.roles.validate()?;
        for project in &self.projects {
            if !self.roles.contains(&project.category) {
                return Err(ContentError::UnknownProjectCategory {
                    title: project.title.clone(),
                    category: project.category.clone(),
                });
            }
        }
        // Skill levels can arrive out of range through deserialization,
        // bypassing the constructor clamp.
        for skill in &self.skills {
            if skill.level > 100 {
                return Err(ContentError::SkillLevelOutOfRange {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(())
    }
}

/// Build the built-in portfolio profile.
pub fn sample_profile() -> Profile {
    let roles = RoleCatalog::new(
        vec![
            "designer",
            "engineer",
            "writer",
            "scientist",
            "artist",
            "developer",
        ],
        vec![
            "I shape interfaces people actually enjoy using.",
            "I build systems that keep working when nobody is watching.",
            "I turn half-formed ideas into words that land.",
            "I ask questions until the data answers back.",
            "I make things that exist for no reason except delight.",
            "I ship software, end to end, and then keep shipping.",
        ],
        vec!["engineer", "artist"],
    );

    Profile {
        name: "Sam Calder".to_string(),
        tagline: "one person, several hats, all of them comfortable".to_string(),
        about: vec![
            "I have spent the last decade wandering between design studios,".to_string(),
            "research labs, and engineering teams, collecting crafts the way".to_string(),
            "other people collect stamps. The common thread is making things".to_string(),
            "that hold up: to users, to load, to a second reading.".to_string(),
        ],
        roles,
        projects: vec![
            Project::new(
                "Gridlight",
                "A dashboard design system with exactly one shade of gray too many.",
                "designer",
            ),
            Project::new(
                "Relay Notes",
                "Field notes from rebuilding a message queue nobody dared touch.",
                "engineer",
            ),
            Project::new(
                "Margin Comments",
                "A year of essays about software, deadlines, and other fictions.",
                "writer",
            ),
            Project::new(
                "Bloom Counts",
                "Pollinator survey data, cleaned, plotted, and finally believed.",
                "scientist",
            ),
            Project::new(
                "Terrain Studies",
                "Generative landscapes rendered one careful pixel at a time.",
                "artist",
            ),
            Project::new(
                "folio",
                "This page. A portfolio that lives in your terminal.",
                "developer",
            ),
            Project::coming_soon(
                "Type Specimens",
                "A typeface study, currently three sketches and a grudge.",
                "designer",
            ),
            Project::coming_soon(
                "Slow Queries",
                "A profiler memoir. The queries are slow; the writing is slower.",
                "writer",
            ),
        ],
        skills: vec![
            Skill::new("Interface design", 85),
            Skill::new("Systems engineering", 90),
            Skill::new("Technical writing", 80),
            Skill::new("Data analysis", 70),
            Skill::new("Illustration", 60),
            Skill::new("Full-stack development", 88),
        ],
        contacts: vec![
            ContactLink::new("email", "sam@calder.example"),
            ContactLink::new("code", "github.com/samcalder"),
            ContactLink::new("writing", "margincomments.example"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_profile_is_valid() {
        sample_profile().validate().unwrap();
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let catalog = RoleCatalog::new(
            Vec::<String>::new(),
            Vec::<String>::new(),
            Vec::<String>::new(),
        );
        assert!(matches!(
            catalog.validate(),
            Err(ContentError::EmptyRoleCatalog)
        ));
    }

    #[test]
    fn test_description_count_mismatch_rejected() {
        let catalog = RoleCatalog::new(
            vec!["designer", "engineer"],
            vec!["only one description"],
            Vec::<String>::new(),
        );
        assert!(matches!(
            catalog.validate(),
            Err(ContentError::DescriptionCountMismatch {
                roles: 2,
                descriptions: 1
            })
        ));
    }

    #[test]
    fn test_unknown_article_role_rejected() {
        let catalog = RoleCatalog::new(
            vec!["designer"],
            vec!["desc"],
            vec!["astronaut"],
        );
        assert!(matches!(
            catalog.validate(),
            Err(ContentError::UnknownArticleRole(_))
        ));
    }

    #[test]
    fn test_unknown_project_category_rejected() {
        let mut profile = sample_profile();
        profile.projects.push(Project::new("Odd", "blurb", "plumber"));
        assert!(matches!(
            profile.validate(),
            Err(ContentError::UnknownProjectCategory { .. })
        ));
    }

    #[test]
    fn test_out_of_range_skill_level_rejected() {
        let mut profile = sample_profile();
        profile.skills.push(Skill {
            name: "Overreach".to_string(),
            level: 200,
        });
        assert!(matches!(
            profile.validate(),
            Err(ContentError::SkillLevelOutOfRange { level: 200, .. })
        ));
    }

    #[test]
    fn test_article_rule_membership() {
        let profile = sample_profile();
        let an: Vec<&str> = (0..profile.roles.len())
            .filter(|&i| profile.roles.takes_an(i))
            .map(|i| profile.roles.role(i))
            .collect();
        assert_eq!(an, vec!["engineer", "artist"]);
    }
}
