use crate::subgraph::erc721::Erc721Contract;
use serde::{Deserialize, Serialize};

const SUPPORTS_METADATA_NOTE: &str = "It supports the ERC-721 metadata extension.";
const NO_METADATA_NOTE: &str = "It does not support the ERC-721 metadata extension.";

/// Public tag describing a token contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Contract Address")]
    pub contract_address: String,
    #[serde(rename = "Public Name Tag")]
    pub public_name_tag: String,
    #[serde(rename = "Project Name")]
    pub project_name: String,
    #[serde(rename = "UI/Website Link")]
    pub website_link: String,
    #[serde(rename = "Public Note")]
    pub public_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagTemplate {
    /// Owning account id is appended to it to build the website link.
    pub website_prefix: String,
}

impl Default for TagTemplate {
    fn default() -> Self {
        Self {
            website_prefix: "https://etherscan.io/address/".to_string(),
        }
    }
}

impl Tag {
    pub fn from_contract(
        chain_id: &str,
        contract: &Erc721Contract,
        template: &TagTemplate,
    ) -> Self {
        let symbol = contract.symbol.as_deref().unwrap_or_default();
        let name = contract.name.as_deref().unwrap_or_default();
        let metadata_note = if contract.supports_metadata {
            SUPPORTS_METADATA_NOTE
        } else {
            NO_METADATA_NOTE
        };

        Self {
            contract_address: format!("eip155:{chain_id}:{}", contract.id),
            public_name_tag: format!("{symbol} token"),
            project_name: name.to_string(),
            website_link: format!("{}{}", template.website_prefix, contract.as_account.id),
            public_note: format!(
                "{symbol} is an ERC-721 token collection named {name}. {metadata_note}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subgraph::erc721::Account;
    use pretty_assertions::assert_eq;

    fn contract(
        id: &str,
        symbol: Option<&str>,
        name: Option<&str>,
        supports_metadata: bool,
    ) -> Erc721Contract {
        Erc721Contract {
            id: id.to_string(),
            symbol: symbol.map(str::to_string),
            as_account: Account { id: id.to_string() },
            supports_metadata,
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn tag_fields_are_derived_from_contract() {
        let contract = contract(
            "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d",
            Some("BAYC"),
            Some("BoredApeYachtClub"),
            true,
        );
        let tag = Tag::from_contract("1", &contract, &TagTemplate::default());

        assert_eq!(
            tag,
            Tag {
                contract_address: "eip155:1:0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d"
                    .to_string(),
                public_name_tag: "BAYC token".to_string(),
                project_name: "BoredApeYachtClub".to_string(),
                website_link:
                    "https://etherscan.io/address/0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d"
                        .to_string(),
                public_note: "BAYC is an ERC-721 token collection named BoredApeYachtClub. \
                    It supports the ERC-721 metadata extension."
                    .to_string(),
            }
        );
    }

    #[test]
    fn note_depends_on_metadata_flag() {
        let template = TagTemplate::default();
        let with = Tag::from_contract("1", &contract("0xa", Some("A"), Some("A"), true), &template);
        let without =
            Tag::from_contract("1", &contract("0xa", Some("A"), Some("A"), false), &template);

        assert!(with.public_note.ends_with(SUPPORTS_METADATA_NOTE));
        assert!(without.public_note.ends_with(NO_METADATA_NOTE));
        assert_eq!(
            Tag {
                public_note: Default::default(),
                ..with
            },
            Tag {
                public_note: Default::default(),
                ..without
            }
        );
    }

    #[test]
    fn transform_is_deterministic() {
        let contract = contract("0xb", Some("BAR"), Some("Bar"), false);
        let template = TagTemplate {
            website_prefix: "https://explorer.example/address/".to_string(),
        };
        let first = Tag::from_contract("137", &contract, &template);
        let second = Tag::from_contract("137", &contract, &template);
        assert_eq!(first, second);
        assert_eq!(first.contract_address, "eip155:137:0xb");
        assert_eq!(first.website_link, "https://explorer.example/address/0xb");
    }

    #[test]
    fn missing_symbol_and_name_render_empty() {
        let tag = Tag::from_contract("1", &contract("0xc", None, None, false), &Default::default());
        assert_eq!(tag.public_name_tag, " token");
        assert_eq!(tag.project_name, "");
    }

    #[test]
    fn tag_is_serialized_with_exact_keys() {
        let tag = Tag::from_contract(
            "1",
            &contract("0xa", Some("FOO"), Some("Foo"), true),
            &Default::default(),
        );
        let value = serde_json::to_value(&tag).unwrap();
        let mut keys = value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "Contract Address",
                "Project Name",
                "Public Name Tag",
                "Public Note",
                "UI/Website Link",
            ]
        );
    }
}
