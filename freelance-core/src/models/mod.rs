mod activity_type;
mod scenario_map;
mod status_result;
mod tax_bracket;

pub use activity_type::ActivityType;
pub use scenario_map::ScenarioMap;
pub use status_result::{
    MicroEntrepreneurResult, SimplifiedStockCompanyResult, SingleMemberLlcResult, StatusResult,
};
pub use tax_bracket::{BracketTable, BracketTableError, TaxBracket, TaxSchedule};
