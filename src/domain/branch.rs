/// Remote branches containing a commit, in the order git listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchList(Vec<String>);

impl BranchList {
    pub fn parse(output: &str) -> Self {
        Self(
            output
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}
