//! End-to-end walk through the public API: narrow a selection, resolve the
//! role, render it.

use pathway::catalog::loader::embedded_catalog;
use pathway::catalog::{CatalogError, Selection};
use pathway::render::{document_filename, render_role_document, render_role_text};

const BANKING: &str = "Banking & Finance";

#[test]
fn test_walk_from_industry_to_pdf() {
    let catalog = embedded_catalog().unwrap();

    assert_eq!(catalog.list_industries(), vec![BANKING]);
    assert!(catalog
        .list_sub_industries(BANKING)
        .unwrap()
        .contains(&"Markets"));
    assert_eq!(
        catalog.list_roles(BANKING, "Markets").unwrap(),
        vec!["Junior Salesperson", "Junior Trader"]
    );

    let details = catalog
        .get_role_details(BANKING, "Markets", "Junior Trader")
        .unwrap();
    assert_eq!(details.majors[0].name, "Mathematics");

    let pdf = render_role_document("Junior Trader", details).unwrap();
    assert!(!pdf.is_empty());
    let text = pdf_extract::extract_text_from_mem(&pdf).unwrap();
    for needle in ["Junior Trader", "Mathematics", "Stochastic Processes"] {
        assert!(text.contains(needle), "missing '{needle}' in:\n{text}");
    }

    assert_eq!(document_filename("Junior Trader", "pdf"), "Junior_Trader.pdf");
}

#[test]
fn test_mismatched_parent_is_not_found() {
    let catalog = embedded_catalog().unwrap();
    let result = catalog.get_role_details(BANKING, "Wealth / Private Banking", "Junior Salesperson");
    assert!(matches!(result, Err(CatalogError::NotFound(_))));
}

#[test]
fn test_every_role_renders_in_both_forms() {
    let catalog = embedded_catalog().unwrap();
    for industry in catalog.list_industries() {
        for sub in catalog.list_sub_industries(industry).unwrap() {
            for role in catalog.list_roles(industry, sub).unwrap() {
                let details = catalog.get_role_details(industry, sub, role).unwrap();
                let pdf = render_role_document(role, details).unwrap();
                assert_eq!(pdf, render_role_document(role, details).unwrap());
                let text = render_role_text(role, details).unwrap();
                assert!(text.contains(&details.majors[0].name));
            }
        }
    }
}

#[test]
fn test_selection_flow_resets_downstream() {
    let catalog = embedded_catalog().unwrap();
    let mut selection = Selection::default();

    selection.select_industry(BANKING);
    selection.select_sub_industry("Markets");
    selection.select_role("Junior Trader");
    assert!(selection.view(&catalog).details.is_some());

    selection.select_sub_industry("Retail Banking");
    let view = selection.view(&catalog);
    assert!(view.details.is_none());
    assert_eq!(view.roles, vec!["Retail Banking Analyst"]);
}
