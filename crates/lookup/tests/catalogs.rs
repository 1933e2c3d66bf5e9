//! Integration tests for the emission line catalogs and decay channels

use nucdata_lookup::{
    AlphaRecord, BetaRecord, DecayRecord, EcbpRecord, Error, GammaRecord, NuclearData,
};
use nucdata_nucname::Nucid;
use nucdata_store::{Dataset, Table};
use rstest::{fixture, rstest};

const CO60: Nucid = Nucid(270600000);
const NI60: Nucid = Nucid(280600000);
const NI60_2: Nucid = Nucid(280600002);
const NI60_1: Nucid = Nucid(280600001);
const CS137: Nucid = Nucid(551370000);
const PU239: Nucid = Nucid(942390000);
const SR90: Nucid = Nucid(380900000);
const Y90: Nucid = Nucid(390900000);
const NA22: Nucid = Nucid(110220000);
const NE22: Nucid = Nucid(100220000);

fn gamma(parent: Nucid, energy: f64, from: Nucid, to: Nucid, k_conv: f64) -> GammaRecord {
    GammaRecord {
        energy,
        energy_err: energy * 1e-5,
        photon_intensity: 99.85,
        photon_intensity_err: 0.03,
        total_intensity: 99.9,
        total_intensity_err: 0.03,
        from_nuc: from,
        to_nuc: to,
        parent_nuc: parent,
        k_conv_e: k_conv,
        ..Default::default()
    }
}

fn gammas() -> Vec<GammaRecord> {
    vec![
        // deliberately out of energy order
        gamma(CO60, 1332.492, NI60_1, NI60, 1.1e-4),
        gamma(CS137, 661.657, Nucid(561370001), Nucid(561370000), 0.0902),
        gamma(CO60, 1173.228, NI60_2, NI60_1, 1.7e-4),
    ]
}

fn alphas() -> Vec<AlphaRecord> {
    vec![
        AlphaRecord {
            energy: 5156.59,
            intensity: 70.77,
            from_nuc: PU239,
            to_nuc: Nucid(922350000),
        },
        AlphaRecord {
            energy: 5144.3,
            intensity: 17.11,
            from_nuc: PU239,
            to_nuc: Nucid(922350001),
        },
    ]
}

fn betas() -> Vec<BetaRecord> {
    vec![BetaRecord {
        endpoint_energy: 546.0,
        avg_energy: 195.7,
        intensity: 100.0,
        from_nuc: SR90,
        to_nuc: Y90,
    }]
}

fn ecbp() -> Vec<EcbpRecord> {
    vec![EcbpRecord {
        endpoint_energy: 545.7,
        avg_energy: 215.5,
        beta_plus_intensity: 90.3,
        ec_intensity: 9.6,
        from_nuc: NA22,
        to_nuc: Nucid(100220001),
        k_conv_e: 0.0,
        l_conv_e: 0.0,
        m_conv_e: 0.0,
    }]
}

fn decays() -> Vec<DecayRecord> {
    vec![
        DecayRecord {
            parent: CO60,
            daughter: NI60,
            decay: "B-".to_string(),
            half_life: 1.6634e8,
            half_life_error: 1.2e4,
            branch_ratio: 1.0,
            photon_branch_ratio: 1.0,
            photon_branch_ratio_error: 0.0,
            beta_branch_ratio: 1.0,
            beta_branch_ratio_error: 0.0,
        },
        DecayRecord {
            parent: NA22,
            daughter: NE22,
            decay: "EC".to_string(),
            half_life: 8.2e7,
            half_life_error: 3.0e4,
            branch_ratio: 0.9,
            ..Default::default()
        },
    ]
}

#[fixture]
fn data() -> NuclearData<Dataset> {
    let dataset = Dataset::new()
        .with_table(Table::Gammas, &gammas())
        .unwrap()
        .with_table(Table::Alphas, &alphas())
        .unwrap()
        .with_table(Table::Betas, &betas())
        .unwrap()
        .with_table(Table::Ecbp, &ecbp())
        .unwrap()
        .with_table(Table::Decays, &decays())
        .unwrap();
    NuclearData::new(dataset)
}

#[rstest]
fn gamma_lines_of_parent(data: NuclearData<Dataset>) {
    let energies = data.gamma_energy(CO60).unwrap();
    assert_eq!(
        energies,
        vec![(1173.228, 1173.228 * 1e-5), (1332.492, 1332.492 * 1e-5)]
    );

    assert_eq!(data.gamma_photon_intensity(CO60).unwrap().len(), 2);
    assert_eq!(data.gamma_total_intensity(CO60).unwrap()[0], (99.9, 0.03));
    assert_eq!(data.gamma_conversion_intensity(CO60).unwrap()[1], (0.0, 0.0));
    assert_eq!(
        data.gamma_from_to(CO60).unwrap(),
        vec![(NI60_2, NI60_1), (NI60_1, NI60)]
    );
    assert_eq!(data.gamma_k_conv(CO60).unwrap(), vec![1.7e-4, 1.1e-4]);
    assert_eq!(data.gamma_l_conv(CS137).unwrap(), vec![0.0]);
    assert_eq!(data.gamma_m_conv(CS137).unwrap(), vec![0.0]);
}

#[rstest]
#[case(661.657, 0.01, vec![CS137])]
#[case(1250.0, 100.0, vec![CO60, CO60])]
#[case(1250.0, -100.0, vec![CO60, CO60])]
#[case(1000.0, 700.0, vec![CS137, CO60, CO60])]
#[case(2000.0, 10.0, vec![])]
fn gamma_energy_window(
    data: NuclearData<Dataset>,
    #[case] energy: f64,
    #[case] error: f64,
    #[case] expected: Vec<Nucid>,
) {
    assert_eq!(data.gamma_parent(energy, error).unwrap(), expected);
}

#[rstest]
fn gamma_transitions_in_window(data: NuclearData<Dataset>) {
    let transitions = data.gamma_from_to_window(1332.492, 0.5).unwrap();
    assert_eq!(transitions, vec![(NI60_1, NI60)]);
}

#[rstest]
fn alpha_lines(data: NuclearData<Dataset>) {
    // ordered by energy, not by row
    assert_eq!(data.alpha_energy(PU239).unwrap(), vec![5144.3, 5156.59]);
    assert_eq!(data.alpha_intensity(PU239).unwrap(), vec![17.11, 70.77]);
    assert_eq!(
        data.alpha_daughter(PU239).unwrap(),
        vec![Nucid(922350001), Nucid(922350000)]
    );

    assert_eq!(data.alpha_parent(5150.0, 10.0).unwrap(), vec![PU239, PU239]);
    assert_eq!(
        data.alpha_daughter_window(5156.0, 1.0).unwrap(),
        vec![Nucid(922350000)]
    );
}

#[rstest]
fn beta_spectra(data: NuclearData<Dataset>) {
    assert_eq!(data.beta_endpoint_energy(SR90).unwrap(), vec![546.0]);
    assert_eq!(data.beta_average_energy(SR90).unwrap(), vec![195.7]);
    assert_eq!(data.beta_intensity(SR90).unwrap(), vec![100.0]);
    assert_eq!(data.beta_daughter(SR90).unwrap(), vec![Y90]);
    assert_eq!(data.beta_parent(546.0, 1.0).unwrap(), vec![SR90]);
    assert_eq!(data.beta_daughter_window(546.0, 1.0).unwrap(), vec![Y90]);
}

#[rstest]
fn ecbp_spectra(data: NuclearData<Dataset>) {
    assert_eq!(data.ecbp_endpoint_energy(NA22).unwrap(), vec![545.7]);
    assert_eq!(data.ecbp_average_energy(NA22).unwrap(), vec![215.5]);
    assert_eq!(data.ec_intensity(NA22).unwrap(), vec![9.6]);
    assert_eq!(data.bp_intensity(NA22).unwrap(), vec![90.3]);
    assert_eq!(data.ecbp_daughter(NA22).unwrap(), vec![Nucid(100220001)]);
    assert_eq!(data.ecbp_parent(545.0, 1.0).unwrap(), vec![NA22]);
    assert_eq!(
        data.ecbp_daughter_window(545.0, 1.0).unwrap(),
        vec![Nucid(100220001)]
    );
    assert_eq!(data.ecbp_k_conv(NA22).unwrap(), vec![0.0]);
    assert_eq!(data.ecbp_l_conv(NA22).unwrap(), vec![0.0]);
    assert_eq!(data.ecbp_m_conv(NA22).unwrap(), vec![0.0]);
}

#[rstest]
#[case(NI60)]
#[case(Nucid(10010000))]
#[case(Nucid(922350000))]
fn unknown_parents_are_empty(data: NuclearData<Dataset>, #[case] parent: Nucid) {
    assert!(data.gamma_energy(parent).unwrap().is_empty());
    assert!(data.alpha_energy(parent).unwrap().is_empty());
    assert!(data.beta_intensity(parent).unwrap().is_empty());
    assert!(data.ec_intensity(parent).unwrap().is_empty());
}

#[test]
fn missing_catalog_fails() {
    let dataset = Dataset::new().with_table(Table::Alphas, &alphas()).unwrap();
    let data = NuclearData::new(dataset);

    assert!(matches!(data.gamma_energy(CO60), Err(Error::Store(_))));
    assert!(matches!(data.gamma_parent(1173.0, 1.0), Err(Error::Store(_))));
    assert_eq!(data.alpha_energy(PU239).unwrap().len(), 2);
}

#[rstest]
fn decay_channels(data: NuclearData<Dataset>) {
    assert_eq!(data.decay_half_life(CO60, NI60).unwrap(), (1.6634e8, 1.2e4));
    assert_eq!(data.decay_branch_ratio(NA22, NE22).unwrap(), 0.9);
    assert_eq!(data.decay_photon_branch_ratio(CO60, NI60).unwrap(), (1.0, 0.0));
    assert_eq!(data.decay_beta_branch_ratio(CO60, NI60).unwrap(), (1.0, 0.0));
    assert_eq!(data.decay_mode(NA22, NE22).unwrap().as_deref(), Some("EC"));

    assert_eq!(data.decay_half_lifes(CO60).unwrap(), vec![(1.6634e8, 1.2e4)]);
    assert_eq!(data.decay_branch_ratios(NA22).unwrap(), vec![0.9]);
    assert_eq!(data.decay_photon_branch_ratios(CO60).unwrap(), vec![(1.0, 0.0)]);
    assert_eq!(data.decay_beta_branch_ratios(NA22).unwrap(), vec![(0.0, 0.0)]);
}

#[rstest]
fn missing_decay_channels_are_zero(data: NuclearData<Dataset>) {
    assert_eq!(data.decay_half_life(NI60, CO60).unwrap(), (0.0, 0.0));
    assert_eq!(data.decay_branch_ratio(NI60, CO60).unwrap(), 0.0);
    assert_eq!(data.decay_mode(NI60, CO60).unwrap(), None);
    assert!(data.decay_branch_ratios(NI60).unwrap().is_empty());
}
