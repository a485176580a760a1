use nandsmith::assert_netlist_eq;
use nandsmith::search::{realize, synthesize};
use nandsmith::table::TruthTable;

fn table(s: &str) -> TruthTable {
    s.parse().unwrap()
}

#[test]
fn identity_reuses_the_input_port() {
    let netlist = realize(1, &table("01")).unwrap();
    assert!(netlist.get_instances().is_empty());
    assert_netlist_eq!(
        netlist.to_string(),
        "A

         DEF GATE
           PORT IN A
           PORT OUT A
         ENDDEF\n"
    );
}

#[test]
fn negation_is_a_self_nand() {
    let netlist = realize(1, &table("10")).unwrap();
    assert_netlist_eq!(
        netlist.to_string(),
        "(A # A)

         DEF GATE
           PORT IN A
           PORT OUT B
           INST NAND0 NAND A A B
         ENDDEF\n"
    );
}

#[test]
fn and_shares_the_inner_nand() {
    let netlist = realize(2, &table("0001")).unwrap();
    assert_netlist_eq!(
        netlist.to_string(),
        "((A # B) # (A # B))

         DEF GATE
           PORT IN A
           PORT IN B
           PORT OUT D
           NET C
           INST NAND0 NAND A B C
           INST NAND1 NAND C C D
         ENDDEF\n"
    );
}

#[test]
fn or_negates_both_inputs() {
    let netlist = realize(2, &table("0111")).unwrap();
    assert_netlist_eq!(
        netlist.to_string(),
        "((A # A) # (B # B))

         DEF GATE
           PORT IN A
           PORT IN B
           PORT OUT E
           NET C
           NET D
           INST NAND0 NAND A A C
           INST NAND1 NAND B B D
           INST NAND2 NAND C D E
         ENDDEF\n"
    );
}

#[test]
fn xor_is_five_instances() {
    let netlist = realize(2, &table("0110")).unwrap();
    assert_netlist_eq!(
        netlist.to_string(),
        "((B # (A # A)) # (A # (B # B)))

         DEF GATE
           PORT IN A
           PORT IN B
           PORT OUT G
           NET C
           NET D
           NET E
           NET F
           INST NAND0 NAND A A C
           INST NAND1 NAND B C D
           INST NAND2 NAND B B E
           INST NAND3 NAND A E F
           INST NAND4 NAND D F G
         ENDDEF\n"
    );
}

#[test]
fn nor_reuses_a_shared_negation() {
    let netlist = realize(2, &table("1000")).unwrap();
    assert_netlist_eq!(
        netlist.to_string(),
        "((A # (A # A)) # ((A # A) # (B # B)))

         DEF GATE
           PORT IN A
           PORT IN B
           PORT OUT G
           NET C
           NET D
           NET E
           NET F
           INST NAND0 NAND A A C
           INST NAND1 NAND A C D
           INST NAND2 NAND B B E
           INST NAND3 NAND C E F
           INST NAND4 NAND D F G
         ENDDEF\n"
    );
}

#[test]
fn lookup_misses_are_reported() {
    let catalog = synthesize(2);

    let err = catalog.netlist(&table("01")).unwrap_err();
    assert!(err.contains("expected 4"));

    let err = catalog.netlist(&table("01100110")).unwrap_err();
    assert!(err.contains("expected 4"));

    let empty = synthesize(0);
    let err = empty.netlist(&table("1")).unwrap_err();
    assert!(err.contains("No realization"));
}

#[test]
fn bad_table_strings_are_rejected() {
    assert!("".parse::<TruthTable>().is_err());
    assert!("0120".parse::<TruthTable>().is_err());
}
