//! Port classification into the visual buckets of the symbol.
//!
//! Inputs, resets and clocks are stacked in that order on the left of the
//! symbol, outputs on the right. Bus interface prefixes take precedence over
//! the declared direction.

use entity_block_core::semantic::{Declaration, Direction};

/// Ports grouped by where they are drawn, each in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets<'a> {
    pub inputs: Vec<&'a Declaration>,
    pub outputs: Vec<&'a Declaration>,
    pub clocks: Vec<&'a Declaration>,
    pub resets: Vec<&'a Declaration>,
}

impl Buckets<'_> {
    /// Total number of classified ports.
    pub fn len(&self) -> usize {
        self.inputs.len() + self.outputs.len() + self.clocks.len() + self.resets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The left column groups in stacking order.
    pub fn left_groups(&self) -> [&[&Declaration]; 3] {
        [&self.inputs, &self.resets, &self.clocks]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Input,
    Output,
    Clock,
    Reset,
}

fn bucket_of(port: &Declaration) -> Bucket {
    let name = port.name();
    if name.starts_with("s_axi") || name.contains("slave_") {
        return Bucket::Input;
    }
    if name.starts_with("m_axi") || name.contains("master_") {
        return Bucket::Output;
    }

    match port.direction() {
        Direction::In => {
            let lower = name.to_lowercase();
            if lower.contains("clk") || lower.contains("clock") {
                Bucket::Clock
            } else if lower.contains("rst") || lower.contains("reset") {
                Bucket::Reset
            } else {
                Bucket::Input
            }
        }
        Direction::Linkage => Bucket::Input,
        Direction::Out | Direction::InOut | Direction::Buffer => Bucket::Output,
    }
}

/// Partitions ports into buckets, keeping their relative order.
///
/// Bus prefixes are matched case-sensitively: a name starting with `s_axi`
/// or containing `slave_` is an input, a name starting with `m_axi` or
/// containing `master_` is an output. Otherwise `in` ports whose name
/// contains `clk`/`clock` or `rst`/`reset` (any case) are clocks or resets,
/// `linkage` ports are inputs and all remaining directions are outputs.
///
/// # Examples
///
/// ```
/// # use entity_block::classify;
/// # use entity_block::semantic::{Declaration, Direction};
/// let ports = vec![
///     Declaration::new("rst_n", Direction::In, "std_logic", None, ""),
///     Declaration::new("m_axi_awvalid", Direction::In, "std_logic", None, ""),
/// ];
/// let buckets = classify(&ports);
/// assert_eq!(buckets.resets.len(), 1);
/// assert_eq!(buckets.outputs[0].name(), "m_axi_awvalid");
/// ```
pub fn classify(ports: &[Declaration]) -> Buckets<'_> {
    let mut buckets = Buckets::default();
    for port in ports {
        let bucket = match bucket_of(port) {
            Bucket::Input => &mut buckets.inputs,
            Bucket::Output => &mut buckets.outputs,
            Bucket::Clock => &mut buckets.clocks,
            Bucket::Reset => &mut buckets.resets,
        };
        bucket.push(port);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn port(name: &str, direction: Direction) -> Declaration {
        Declaration::new(name, direction, "std_logic", None, "")
    }

    fn names<'a>(bucket: &[&'a Declaration]) -> Vec<&'a str> {
        bucket.iter().map(|port| port.name()).collect()
    }

    #[test]
    fn test_direction_buckets() {
        let ports = vec![
            port("data_in", Direction::In),
            port("q", Direction::Out),
            port("bus", Direction::InOut),
            port("level", Direction::Buffer),
            port("analog", Direction::Linkage),
        ];
        let buckets = classify(&ports);
        assert_eq!(names(&buckets.inputs), vec!["data_in", "analog"]);
        assert_eq!(names(&buckets.outputs), vec!["q", "bus", "level"]);
        assert!(buckets.clocks.is_empty());
        assert!(buckets.resets.is_empty());
    }

    #[test]
    fn test_clock_and_reset_names() {
        let ports = vec![
            port("CLK", Direction::In),
            port("sys_clock", Direction::In),
            port("rst_n", Direction::In),
            port("Reset", Direction::In),
            port("clk_rst", Direction::In),
        ];
        let buckets = classify(&ports);
        assert_eq!(names(&buckets.clocks), vec!["CLK", "sys_clock", "clk_rst"]);
        assert_eq!(names(&buckets.resets), vec!["rst_n", "Reset"]);
    }

    #[test]
    fn test_clock_names_only_for_inputs() {
        let ports = vec![port("clk_out", Direction::Out), port("rst_req", Direction::Linkage)];
        let buckets = classify(&ports);
        assert_eq!(names(&buckets.outputs), vec!["clk_out"]);
        assert_eq!(names(&buckets.inputs), vec!["rst_req"]);
    }

    #[test]
    fn test_bus_prefixes_override_direction() {
        let ports = vec![
            port("m_axi_awvalid", Direction::In),
            port("s_axi_rdata", Direction::Out),
            port("dma_master_req", Direction::In),
            port("reg_slave_ack", Direction::Out),
            port("s_axi_aclk", Direction::In),
        ];
        let buckets = classify(&ports);
        assert_eq!(names(&buckets.outputs), vec!["m_axi_awvalid", "dma_master_req"]);
        assert_eq!(
            names(&buckets.inputs),
            vec!["s_axi_rdata", "reg_slave_ack", "s_axi_aclk"]
        );
        assert!(buckets.clocks.is_empty());
    }

    #[test]
    fn test_bus_prefixes_are_case_sensitive() {
        let ports = [port("M_AXI_WDATA", Direction::In)];
        let buckets = classify(&ports);
        assert_eq!(names(&buckets.inputs), vec!["M_AXI_WDATA"]);
    }

    #[test]
    fn test_left_groups_order() {
        let ports = vec![port("clk", Direction::In), port("rst", Direction::In), port("a", Direction::In)];
        let buckets = classify(&ports);
        let groups = buckets.left_groups();
        assert_eq!(names(groups[0]), vec!["a"]);
        assert_eq!(names(groups[1]), vec!["rst"]);
        assert_eq!(names(groups[2]), vec!["clk"]);
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::In),
            Just(Direction::Out),
            Just(Direction::InOut),
            Just(Direction::Buffer),
            Just(Direction::Linkage),
        ]
    }

    fn ports_strategy() -> impl Strategy<Value = Vec<Declaration>> {
        prop::collection::vec(
            (
                "(s_axi|m_axi|x)?_?[a-z]{0,4}(clk|rst|slave_|master_)?[a-z]{0,3}",
                direction_strategy(),
            ),
            0..16,
        )
        .prop_map(|ports| {
            ports
                .into_iter()
                .enumerate()
                .map(|(index, (name, direction))| port(&format!("{name}{index}"), direction))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn every_port_in_exactly_one_bucket(ports in ports_strategy()) {
            let buckets = classify(&ports);
            prop_assert_eq!(buckets.len(), ports.len());

            for port in &ports {
                let count = [&buckets.inputs, &buckets.outputs, &buckets.clocks, &buckets.resets]
                    .iter()
                    .filter(|bucket| bucket.iter().any(|p| std::ptr::eq(*p, port)))
                    .count();
                prop_assert_eq!(count, 1);
            }
        }

        #[test]
        fn buckets_keep_declaration_order(ports in ports_strategy()) {
            let buckets = classify(&ports);
            let position = |p: &Declaration| ports.iter().position(|q| std::ptr::eq(p, q));

            for bucket in [&buckets.inputs, &buckets.outputs, &buckets.clocks, &buckets.resets] {
                let positions: Vec<_> = bucket.iter().map(|p| position(*p)).collect();
                prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }
}
