//! Named Patient Program membership.
//!
//! Active ingredients on this list can be imported for an individual patient
//! under the named-patient pathway. The list mirrors the distributor's data
//! set; comparison runs through slug folding so Turkish spellings
//! (`KARFİLZOMİB`) match their ASCII forms.

use crate::slug::slugify;

const NPP_ACTIVE_INGREDIENTS: &[&str] = &[
    "BRENTUXIMAB",
    "FEBUXOSTAT",
    "EVEROLIMUS",
    "ALECTINIB",
    "TERIFLUNOMIDE",
    "MYCOPHENOLATE MOFETIL",
    "PENTOSAN POLYSULFATE",
    "PIRFENIDONE",
    "OBINUTUZUMAB",
    "RIFAXIMIN",
    "IBRUTINIB",
    "RUXOLITINIB",
    "RUXOLITINIB PHOSPHATE",
    "TRASTUZUMAB",
    "LEVETIRACETAM",
    "KARFİLZOMİB",
    "BENDAMUSTINE",
    "TRAMETİNİB",
    "MITOMYCIN",
    "SORAFENIB",
    "OCRELIZUMAB",
    "NINTEDANIB",
    "NIVOLUMAB",
    "EPINEPHRINE",
    "PERTUZUMAB",
    "ELTROMBOPAG OLAMIN",
    "SUNITINIB MALEATE",
    "DABRAFENIB",
    "OSİMERTİNİB",
    "NILOTINIB",
    "NATALIZUMAB",
    "VENETOCLAX",
    "ILOPROST",
    "PAZOPANIB HYDROCHLORIDE",
    "CRIZOTINIB",
];

/// Whether an active ingredient is covered by the Named Patient Program.
pub fn is_npp_ingredient(active_ingredient: &str) -> bool {
    let needle = slugify(active_ingredient);
    NPP_ACTIVE_INGREDIENTS
        .iter()
        .any(|entry| slugify(entry) == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_regardless_of_case_and_turkish_spelling() {
        assert!(is_npp_ingredient("ibrutinib"));
        assert!(is_npp_ingredient("Karfilzomib"));
        assert!(is_npp_ingredient("OSİMERTİNİB"));
    }

    #[test]
    fn unlisted_ingredient_is_not_npp() {
        assert!(!is_npp_ingredient("PARASETAMOL"));
    }
}
