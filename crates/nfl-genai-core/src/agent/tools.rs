//! Tool selection per personality.

use serde::Serialize;

use crate::prompt::Personality;

/// Personality whose tools come from the remote tool gateway.
pub const GATEWAY_PERSONALITY: &str = "nfl_analyst";

/// Local tools the agent can call.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgentTool {
    /// List games for a season/week/team
    GetGameList,
    /// Raw play-by-play inputs for a game
    GetGameInputs,
    /// Generated outputs (recaps, stats) for a game
    GetGameOutputs,
    /// Search over the NFL knowledge base
    NflKbSearch,
}

impl AgentTool {
    /// Tool name as registered with the agent runtime.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetGameList => "get_game_list",
            Self::GetGameInputs => "get_game_inputs",
            Self::GetGameOutputs => "get_game_outputs",
            Self::NflKbSearch => "nfl_kb_search",
        }
    }
}

/// Tools available to every local personality.
pub const BASE_TOOLS: &[AgentTool] = &[
    AgentTool::GetGameList,
    AgentTool::GetGameInputs,
    AgentTool::GetGameOutputs,
];

/// Where an agent gets its tools from.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "source", content = "tools", rename_all = "snake_case")]
pub enum ToolSet {
    /// In-process tools
    Local(Vec<AgentTool>),
    /// Tools listed by the remote gateway at invocation time
    Gateway,
}

impl ToolSet {
    /// Selects tools for `personality`.
    ///
    /// `nfl_stats` adds knowledge-base search to the base set; the gateway
    /// personality defers to the remote tool list.
    pub fn for_personality(personality: &Personality) -> Self {
        match personality {
            Personality::Preset(option) if option.id == "nfl_stats" => {
                let mut tools = BASE_TOOLS.to_vec();
                tools.push(AgentTool::NflKbSearch);
                Self::Local(tools)
            }
            Personality::Custom(text) if text == GATEWAY_PERSONALITY => Self::Gateway,
            _ => Self::Local(BASE_TOOLS.to_vec()),
        }
    }

    /// Names of local tools; empty for the gateway.
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            Self::Local(tools) => tools.iter().map(AgentTool::name).collect(),
            Self::Gateway => Vec::new(),
        }
    }
}
