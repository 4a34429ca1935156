/*
[INPUT]:  Mention rules chosen by the caller
[OUTPUT]: allowed_mentions object for the message payload
[POS]:    Data layer - mention control
[UPDATE]: When the allowed mentions object gains fields or limits change
*/

use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationError, check_count};

pub const MAX_MENTION_IDS: usize = 100;

/// Mention categories that can be parsed from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowedMentionType {
    Roles,
    Users,
    Everyone,
}

/// Controls which mentions in the content actually notify.
///
/// An empty object suppresses every mention. A category listed in `parse` and the
/// matching explicit id list are mutually exclusive; the mutators below keep the
/// two in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedMentions {
    pub parse: Vec<AllowedMentionType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
}

impl AllowedMentions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow every mention of `kind` found in the content.
    pub fn add_parse(&mut self, kind: AllowedMentionType) -> &mut Self {
        match kind {
            AllowedMentionType::Roles => self.roles.clear(),
            AllowedMentionType::Users => self.users.clear(),
            AllowedMentionType::Everyone => {}
        }
        if !self.parse.contains(&kind) {
            self.parse.push(kind);
        }
        self
    }

    pub fn remove_parse(&mut self, kind: AllowedMentionType) -> &mut Self {
        self.parse.retain(|existing| *existing != kind);
        self
    }

    /// Allow a single user to be mentioned.
    pub fn add_user(&mut self, user_id: impl Into<String>) -> &mut Self {
        let user_id = user_id.into();
        self.remove_parse(AllowedMentionType::Users);
        if !self.users.contains(&user_id) {
            self.users.push(user_id);
        }
        self
    }

    pub fn remove_user(&mut self, user_id: &str) -> &mut Self {
        self.users.retain(|existing| existing != user_id);
        self
    }

    /// Allow a single role to be mentioned.
    pub fn add_role(&mut self, role_id: impl Into<String>) -> &mut Self {
        let role_id = role_id.into();
        self.remove_parse(AllowedMentionType::Roles);
        if !self.roles.contains(&role_id) {
            self.roles.push(role_id);
        }
        self
    }

    pub fn remove_role(&mut self, role_id: &str) -> &mut Self {
        self.roles.retain(|existing| existing != role_id);
        self
    }
}

impl Validate for AllowedMentions {
    fn validate(&self) -> Result<(), ValidationError> {
        check_count("allowed_mentions.roles", self.roles.len(), 0, MAX_MENTION_IDS)?;
        check_count("allowed_mentions.users", self.users.len(), 0, MAX_MENTION_IDS)?;

        if self.parse.contains(&AllowedMentionType::Users) && !self.users.is_empty() {
            return Err(ValidationError::Conflict {
                first: "allowed_mentions.parse users",
                second: "allowed_mentions.users",
            });
        }
        if self.parse.contains(&AllowedMentionType::Roles) && !self.roles.is_empty() {
            return Err(ValidationError::Conflict {
                first: "allowed_mentions.parse roles",
                second: "allowed_mentions.roles",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_mentions_suppress_everything() {
        let mentions = AllowedMentions::new();
        assert_eq!(serde_json::to_value(&mentions).expect("serialize"), json!({ "parse": [] }));
        assert!(mentions.validate().is_ok());
    }

    #[test]
    fn explicit_ids_replace_parse_category() {
        let mut mentions = AllowedMentions::new();
        mentions
            .add_parse(AllowedMentionType::Users)
            .add_user("80351110224678912")
            .add_parse(AllowedMentionType::Roles)
            .add_role("41771983423143936")
            .remove_parse(AllowedMentionType::Roles)
            .remove_role("41771983423143936");

        assert!(mentions.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&mentions).expect("serialize"),
            json!({ "parse": [], "users": ["80351110224678912"] })
        );
    }

    #[test]
    fn parse_category_clears_explicit_ids() {
        let mut mentions = AllowedMentions::new();
        mentions.add_user("1").add_user("1").add_parse(AllowedMentionType::Users);

        assert!(mentions.users.is_empty());
        assert_eq!(mentions.parse, vec![AllowedMentionType::Users]);
    }

    #[test]
    fn hand_built_conflict_is_rejected() {
        let mentions = AllowedMentions {
            parse: vec![AllowedMentionType::Roles],
            roles: vec!["1".to_string()],
            users: Vec::new(),
        };
        assert!(matches!(mentions.validate(), Err(ValidationError::Conflict { .. })));
    }

    #[test]
    fn too_many_users_is_rejected() {
        let mut mentions = AllowedMentions::new();
        for id in 0..=MAX_MENTION_IDS {
            mentions.add_user(id.to_string());
        }
        assert!(matches!(mentions.validate(), Err(ValidationError::TooMany { .. })));
    }

    #[test]
    fn role_limit() {
        let mut mentions = AllowedMentions::new();
        for id in 0..MAX_MENTION_IDS {
            mentions.add_role(id.to_string());
        }
        assert!(mentions.validate().is_ok());

        mentions.add_role("overflow");
        assert!(matches!(
            mentions.validate(),
            Err(ValidationError::TooMany {
                field: "allowed_mentions.roles",
                max: 100,
                actual: 101
            })
        ));
    }
}
