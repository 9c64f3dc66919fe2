use super::*;
use crate::special::SpecialError;

// ======================== Binomial functions ========================

#[test]
fn bdtr_exact_rational() {
    // P(X ≤ 2), X ~ B(10, ½) = 56/1024
    assert!((bdtr(2, 10, 0.5) - 0.0546875).abs() < 1e-15);
    assert!((bdtr(5, 20, 0.3) - 0.41637082944748121).abs() < 1e-14);
    assert!((bdtr(0, 10, 0.2) - 0.8f64.powi(10)).abs() < 1e-16);
}

#[test]
fn bdtr_at_n_is_one() {
    for &p in &[0.0, 0.1, 0.5, 0.99, 1.0] {
        assert_eq!(bdtr(7, 7, p), 1.0);
    }
}

#[test]
fn bdtrc_complements_bdtr() {
    assert!((bdtrc(5, 20, 0.3) - 0.58362917055251857).abs() < 1e-14);
    for k in 0..12 {
        let s = bdtr(k, 12, 0.37) + bdtrc(k, 12, 0.37);
        assert!((s - 1.0).abs() < 1e-14, "k = {k}: {s}");
    }
    assert_eq!(bdtrc(-1, 12, 0.5), 1.0);
    assert_eq!(bdtrc(12, 12, 0.5), 0.0);
}

#[test]
fn bdtrc_small_p_keeps_precision() {
    // 1 − (1 − p)ⁿ for tiny p is ≈ n·p
    let v = bdtrc(0, 10, 1e-12);
    assert!((v / 1e-11 - 1.0).abs() < 1e-9);
}

#[test]
fn bdtri_roundtrip() {
    for &(k, n) in &[(0, 5), (3, 10), (9, 40)] {
        for &y in &[0.05, 0.5, 0.9] {
            let p = bdtri(k, n, y);
            assert!((bdtr(k, n, p) - y).abs() < 1e-12, "k={k} n={n} y={y}");
        }
    }
}

#[test]
fn binomial_functions_domain() {
    let r = bdtr_checked(3, 10, 1.5);
    assert_eq!(r.error, Some(SpecialError::Domain));
    assert_eq!(r.value, 0.0);
    assert_eq!(bdtr_checked(11, 10, 0.5).error, Some(SpecialError::Domain));
    assert_eq!(bdtr_checked(-1, 10, 0.5).error, Some(SpecialError::Domain));
    assert_eq!(bdtri_checked(10, 10, 0.5).error, Some(SpecialError::Domain));
    assert_eq!(bdtrc_checked(3, 2, 0.5).error, Some(SpecialError::Domain));
}

// ======================== Negative binomial functions ========================

#[test]
fn nbdtr_values() {
    assert!((nbdtr(4, 3, 0.4) - 0.580096).abs() < 1e-14);
    // One success: geometric
    for k in 0..6 {
        let expected = 1.0 - 0.7f64.powi(k + 1);
        assert!((nbdtr(k, 1, 0.3) - expected).abs() < 1e-14);
    }
}

#[test]
fn nbdtrc_and_inverse() {
    for k in 0..8 {
        let s = nbdtr(k, 4, 0.35) + nbdtrc(k, 4, 0.35);
        assert!((s - 1.0).abs() < 1e-14);
    }
    let p = nbdtri(6, 2, 0.75);
    assert!((nbdtr(6, 2, p) - 0.75).abs() < 1e-12);
    assert_eq!(nbdtr_checked(-1, 2, 0.5).error, Some(SpecialError::Domain));
    assert_eq!(nbdtri_checked(2, 2, 1.5).error, Some(SpecialError::Domain));
}

// ======================== Poisson functions ========================

#[test]
fn pdtr_values() {
    assert!((pdtr(3, 2.5) - 0.75757613313306596).abs() < 1e-14);
    assert!((pdtrc(3, 2.5) - 0.24242386686693404).abs() < 1e-14);
    assert!((pdtr(0, 1.7) - (-1.7f64).exp()).abs() < 1e-15);
    assert_eq!(pdtr(4, 0.0), 1.0);
    assert_eq!(pdtrc(4, 0.0), 0.0);
}

#[test]
fn pdtri_roundtrip() {
    for &k in &[0, 2, 10] {
        for &y in &[0.1, 0.5, 0.95] {
            let m = pdtri(k, y);
            assert!((pdtr(k, m) - y).abs() < 1e-12, "k={k} y={y}");
        }
    }
    assert_eq!(pdtri_checked(2, 1.0).error, Some(SpecialError::Domain));
    assert_eq!(pdtr_checked(-1, 1.0).error, Some(SpecialError::Domain));
    assert_eq!(pdtrc_checked(1, -1.0).error, Some(SpecialError::Domain));
}

// ======================== Gamma and chi-square functions ========================

#[test]
fn gdtr_values() {
    // rate ½, shape 3, x = 4 → igam(3, 2)
    assert!((gdtr(0.5, 3.0, 4.0) - 0.32332358381693654).abs() < 1e-14);
    assert!((gdtr(0.5, 3.0, 4.0) + gdtrc(0.5, 3.0, 4.0) - 1.0).abs() < 1e-15);
    assert_eq!(gdtr_checked(1.0, 2.0, -1.0).error, Some(SpecialError::Domain));
    assert_eq!(gdtrc_checked(1.0, 2.0, -1.0).error, Some(SpecialError::Domain));
}

#[test]
fn chdtr_values() {
    assert!((chdtr(5.0, 3.0) - 0.30001416412137249).abs() < 1e-14);
    assert!((chdtrc(5.0, 11.0705) - 0.049999955428043652).abs() < 1e-14);
    assert_eq!(chdtr_checked(3.0, -1.0).error, Some(SpecialError::Domain));
    assert_eq!(chdtr_checked(0.0, 1.0).error, Some(SpecialError::Domain));
}

#[test]
fn chdtri_inverts_complement() {
    for &df in &[1.0, 4.0, 30.0] {
        for &y in &[0.01, 0.5, 0.9] {
            let x = chdtri(df, y);
            assert!((chdtrc(df, x) - y).abs() < 1e-12, "df={df} y={y}");
        }
    }
    assert_eq!(chdtri_checked(3.0, 1.5).error, Some(SpecialError::Domain));
}

// ======================== F functions ========================

#[test]
fn fdtr_values() {
    assert!((fdtr(3, 12, 2.0) - 0.83216844355418279).abs() < 1e-14);
    assert!((fdtr(3, 12, 2.0) + fdtrc(3, 12, 2.0) - 1.0).abs() < 1e-15);
    assert_eq!(fdtr(3, 12, 0.0), 0.0);
    assert_eq!(fdtr_checked(0, 12, 1.0).error, Some(SpecialError::Domain));
    assert_eq!(fdtrc_checked(3, 12, -1.0).error, Some(SpecialError::Domain));
}

#[test]
fn fdtri_values() {
    assert!((fdtri(5, 10, 0.05) - 3.3258345304130119).abs() < 1e-11);
    for &y in &[0.0005, 0.2, 0.8] {
        let x = fdtri(4, 9, y);
        assert!((fdtrc(4, 9, x) - y).abs() < 1e-12, "y={y}");
    }
    assert_eq!(fdtri_checked(4, 9, 0.0).error, Some(SpecialError::Domain));
}

// ======================== Student's t functions ========================

#[test]
fn stdtr_values() {
    // Even k closed form: k = 4, t = 1.5 gives 0.896
    assert!((stdtr(4, 1.5) - 0.896).abs() < 1e-15);
    assert!((stdtr(7, -3.0) - 0.009971063065996269).abs() < 1e-15);
    assert!((stdtr(3, 0.7) - 0.73283650084761823).abs() < 1e-15);
    assert!((stdtr(100, 2.0) - 0.97589391063443312).abs() < 1e-14);
    assert_eq!(stdtr(3, 0.0), 0.5);
}

#[test]
fn stdtr_symmetry() {
    for &k in &[1, 2, 5, 30] {
        for &t in &[0.3, 1.0, 2.5, 6.0] {
            let s = stdtr(k, t) + stdtr(k, -t);
            assert!((s - 1.0).abs() < 1e-14, "k={k} t={t}");
        }
    }
}

#[test]
fn stdtri_roundtrip() {
    for &k in &[1, 3, 12] {
        for &p in &[0.001, 0.1, 0.4, 0.5, 0.7, 0.99] {
            let t = stdtri(k, p);
            assert!((stdtr(k, t) - p).abs() < 1e-12, "k={k} p={p}");
        }
    }
    assert_eq!(stdtri(5, 0.5), 0.0);
    assert_eq!(stdtri_checked(0, 0.3).error, Some(SpecialError::Domain));
    assert_eq!(stdtri_checked(5, 1.0).error, Some(SpecialError::Domain));
    assert_eq!(stdtr_checked(-2, 1.0).error, Some(SpecialError::Domain));
}

// ======================== Normal ========================

#[test]
fn normal_pdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    let expected = 1.0 / (2.0 * core::f64::consts::PI).sqrt();
    assert!((n.pdf(0.0) - expected).abs() < 1e-15);
}

#[test]
fn normal_cdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-15);
    // Φ(1) ≈ 0.8413
    assert!((n.cdf(1.0) - 0.8413447460685429).abs() < 1e-15);
    // Φ(-1) ≈ 0.1587
    assert!((n.cdf(-1.0) - 0.15865525393145702).abs() < 1e-15);
    assert!((n.sf(1.0) - 0.15865525393145702).abs() < 1e-15);
}

#[test]
fn normal_quantile() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert!((n.quantile(0.5)).abs() < 1e-15);
    assert!((n.quantile(0.975) - 1.959963984540054).abs() < 1e-14);
    assert!((n.quantile(0.025) + 1.959963984540054).abs() < 1e-14);
    assert_eq!(n.quantile(0.0), f64::NEG_INFINITY);
    assert_eq!(n.quantile(1.0), f64::INFINITY);
}

#[test]
fn normal_mean_variance() {
    let n = Normal::new(3.0_f64, 2.0).unwrap();
    assert!((n.mean() - 3.0).abs() < 1e-14);
    assert!((n.variance() - 4.0).abs() < 1e-14);
    assert!((n.quantile(n.cdf(4.2)) - 4.2).abs() < 1e-13);
}

#[test]
fn normal_ln_pdf() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert!((n.ln_pdf(0.0) - n.pdf(0.0).ln()).abs() < 1e-14);
    assert!((n.ln_pdf(3.0) - n.pdf(3.0).ln()).abs() < 1e-13);
}

#[test]
fn normal_invalid() {
    assert_eq!(Normal::new(0.0_f64, 0.0).unwrap_err(), StatsError::InvalidParameter);
    assert_eq!(Normal::new(0.0_f64, -1.0).unwrap_err(), StatsError::InvalidParameter);
    assert_eq!(Normal::new(0.0_f64, f64::NAN).unwrap_err(), StatsError::InvalidParameter);
}

#[test]
fn normal_f32() {
    let n = Normal::new(0.0_f32, 1.0).unwrap();
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-7);
    assert!((n.quantile(0.975) - 1.959964).abs() < 1e-6);
    assert!((n.mean()).abs() < 1e-7);
}

// ======================== Gamma ========================

#[test]
fn gamma_pdf_at_mode() {
    // Gamma(3, 1) has mode 2: pdf = 2 e⁻²
    let g = Gamma::new(3.0_f64, 1.0).unwrap();
    let expected = 2.0 * (-2.0f64).exp();
    assert!((g.pdf(2.0) - expected).abs() < 1e-14);
}

#[test]
fn gamma_pdf_at_zero() {
    assert_eq!(Gamma::new(1.0_f64, 2.5).unwrap().pdf(0.0), 2.5);
    assert_eq!(Gamma::new(2.0_f64, 1.0).unwrap().pdf(0.0), 0.0);
    assert!(Gamma::new(0.5_f64, 1.0).unwrap().pdf(0.0).is_infinite());
}

#[test]
fn gamma_cdf_sf() {
    let g = Gamma::new(2.5_f64, 2.0).unwrap();
    assert!((g.sf(3.0) - 0.03478778050624185).abs() < 1e-14);
    assert!((g.cdf(3.0) + g.sf(3.0) - 1.0).abs() < 1e-15);
    assert_eq!(g.cdf(-1.0), 0.0);
    assert_eq!(g.sf(0.0), 1.0);
}

#[test]
fn gamma_quantile_roundtrip() {
    let g = Gamma::new(2.0_f64, 3.0).unwrap();
    for &p in &[0.01, 0.25, 0.5, 0.75, 0.99] {
        let x = g.quantile(p);
        assert!((g.cdf(x) - p).abs() < 1e-12, "p = {p}");
    }
    assert_eq!(g.quantile(0.0), 0.0);
}

#[test]
fn gamma_mean_variance() {
    let g = Gamma::new(3.0_f64, 2.0).unwrap();
    assert!((g.mean() - 1.5).abs() < 1e-14);
    assert!((g.variance() - 0.75).abs() < 1e-14);
}

#[test]
fn gamma_invalid() {
    assert!(Gamma::new(0.0_f64, 1.0).is_err());
    assert!(Gamma::new(1.0_f64, -1.0).is_err());
}

// ======================== Beta ========================

#[test]
fn beta_uniform_case() {
    let b = Beta::new(1.0_f64, 1.0).unwrap();
    assert!((b.pdf(0.3) - 1.0).abs() < 1e-14);
    assert!((b.cdf(0.3) - 0.3).abs() < 1e-14);
    assert!((b.sf(0.3) - 0.7).abs() < 1e-14);
    assert!((b.quantile(0.42) - 0.42).abs() < 1e-12);
}

#[test]
fn beta_symmetric() {
    let b = Beta::new(2.5_f64, 2.5).unwrap();
    assert!((b.cdf(0.5) - 0.5).abs() < 1e-14);
    assert!((b.pdf(0.2) - b.pdf(0.8)).abs() < 1e-13);
}

#[test]
fn beta_quantile_roundtrip() {
    let b = Beta::new(2.0_f64, 5.0).unwrap();
    for &p in &[0.05, 0.3, 0.6, 0.95] {
        let x = b.quantile(p);
        assert!((b.cdf(x) - p).abs() < 1e-12, "p = {p}");
    }
}

#[test]
fn beta_mean_variance() {
    let b = Beta::new(2.0_f64, 3.0).unwrap();
    assert!((b.mean() - 0.4).abs() < 1e-14);
    assert!((b.variance() - 0.04).abs() < 1e-14);
}

#[test]
fn beta_invalid() {
    assert!(Beta::new(0.0_f64, 1.0).is_err());
    assert!(Beta::new(1.0_f64, -2.0).is_err());
}

// ======================== ChiSquared ========================

#[test]
fn chi_squared_cdf() {
    // k = 2 is Exponential(½)
    let c = ChiSquared::new(2.0_f64).unwrap();
    assert!((c.cdf(3.0) - (1.0 - (-1.5f64).exp())).abs() < 1e-15);
    assert!((c.sf(3.0) - (-1.5f64).exp()).abs() < 1e-15);
}

#[test]
fn chi_squared_quantile_roundtrip() {
    let c = ChiSquared::new(5.0_f64).unwrap();
    for &p in &[0.01, 0.5, 0.95] {
        let x = c.quantile(p);
        assert!((c.cdf(x) - p).abs() < 1e-12, "p = {p}");
    }
    // Real degrees of freedom below one
    let c = ChiSquared::new(0.5_f64).unwrap();
    let x = c.quantile(0.3);
    assert!((c.cdf(x) - 0.3).abs() < 1e-12);
}

#[test]
fn chi_squared_mean_variance() {
    let c = ChiSquared::new(7.0_f64).unwrap();
    assert!((c.mean() - 7.0).abs() < 1e-14);
    assert!((c.variance() - 14.0).abs() < 1e-14);
}

#[test]
fn chi_squared_invalid() {
    assert!(ChiSquared::new(0.0_f64).is_err());
}

// ======================== StudentT ========================

#[test]
fn student_t_symmetric() {
    let t = StudentT::new(5.0_f64).unwrap();
    assert!((t.cdf(0.0) - 0.5).abs() < 1e-15);
    assert!((t.cdf(1.3) + t.cdf(-1.3) - 1.0).abs() < 1e-14);
    assert!((t.sf(1.3) - t.cdf(-1.3)).abs() < 1e-15);
}

#[test]
fn student_t_pdf_symmetric() {
    let t = StudentT::new(3.0_f64).unwrap();
    assert!((t.pdf(1.2) - t.pdf(-1.2)).abs() < 1e-15);
}

#[test]
fn student_t_matches_stdtr() {
    let t = StudentT::new(4.0_f64).unwrap();
    for &x in &[-3.0, -0.5, 0.8, 2.0] {
        assert!((t.cdf(x) - stdtr(4, x)).abs() < 1e-14, "x = {x}");
    }
    assert!((t.quantile(0.9) - stdtri(4, 0.9)).abs() < 1e-14);
}

#[test]
fn student_t_real_df() {
    let t = StudentT::new(2.5_f64).unwrap();
    assert!((t.cdf(1.0) - 0.79796948636086326).abs() < 1e-14);
    let x = t.quantile(0.8);
    assert!((t.cdf(x) - 0.8).abs() < 1e-12);
}

#[test]
fn student_t_large_df_approaches_normal() {
    let t = StudentT::new(1e6_f64).unwrap();
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    for &x in &[-2.0, -0.5, 1.0, 2.5] {
        assert!((t.cdf(x) - n.cdf(x)).abs() < 1e-6);
    }
}

#[test]
fn student_t_mean_variance() {
    let t = StudentT::new(10.0_f64).unwrap();
    assert!((t.mean()).abs() < 1e-14);
    assert!((t.variance() - 1.25).abs() < 1e-14);
    assert!(StudentT::new(1.5_f64).unwrap().variance().is_infinite());
    assert!(StudentT::new(1.0_f64).unwrap().mean().is_nan());
}

#[test]
fn student_t_invalid() {
    assert!(StudentT::new(0.0_f64).is_err());
}

// ======================== FisherF ========================

#[test]
fn fisher_f_matches_fdtr() {
    let f = FisherF::new(3.0_f64, 12.0).unwrap();
    assert!((f.cdf(2.0) - fdtr(3, 12, 2.0)).abs() < 1e-15);
    assert!((f.sf(2.0) - fdtrc(3, 12, 2.0)).abs() < 1e-15);
    assert!((f.quantile(0.95) - fdtri(3, 12, 0.05)).abs() < 1e-12);
}

#[test]
fn fisher_f_pdf_integrates_cdf() {
    // Central difference of the CDF
    let f = FisherF::new(4.0_f64, 9.0).unwrap();
    let h = 1e-5;
    for &x in &[0.3, 1.0, 2.7] {
        let numerical = (f.cdf(x + h) - f.cdf(x - h)) / (2.0 * h);
        assert!((numerical - f.pdf(x)).abs() < 1e-8, "x = {x}");
    }
}

#[test]
fn fisher_f_mean_variance() {
    let f = FisherF::new(5.0_f64, 10.0).unwrap();
    assert!((f.mean() - 1.25).abs() < 1e-14);
    // 2·100·13 / (5·64·6)
    assert!((f.variance() - 2600.0 / 1920.0).abs() < 1e-14);
    assert!(FisherF::new(5.0_f64, 2.0).unwrap().mean().is_nan());
}

#[test]
fn fisher_f_invalid() {
    assert!(FisherF::new(0.0_f64, 1.0).is_err());
    assert!(FisherF::new(1.0_f64, f64::INFINITY).is_err());
}

// ======================== Binomial ========================

#[test]
fn binomial_pmf() {
    let b = Binomial::new(10, 0.5_f64).unwrap();
    // C(10,5) / 2^10 = 252/1024
    assert!((b.pmf(5) - 252.0 / 1024.0).abs() < 1e-14);
    assert_eq!(b.pmf(11), 0.0);
}

#[test]
fn binomial_degenerate_p() {
    let b = Binomial::new(6, 0.0_f64).unwrap();
    assert_eq!(b.pmf(0), 1.0);
    assert_eq!(b.pmf(1), 0.0);
    let b = Binomial::new(6, 1.0_f64).unwrap();
    assert_eq!(b.pmf(6), 1.0);
    assert_eq!(b.pmf(5), 0.0);
}

#[test]
fn binomial_cdf() {
    let b = Binomial::new(10, 0.5_f64).unwrap();
    assert!((b.cdf(2) - 0.0546875).abs() < 1e-15);
    assert_eq!(b.cdf(10), 1.0);
    assert_eq!(b.sf(10), 0.0);
    assert!((b.cdf(4) + b.sf(4) - 1.0).abs() < 1e-15);
}

#[test]
fn binomial_cdf_via_pmf_sum() {
    let b = Binomial::new(15, 0.3_f64).unwrap();
    let mut sum = 0.0;
    for k in 0..=15 {
        sum += b.pmf(k);
        assert!((b.cdf(k) - sum).abs() < 1e-13, "k = {k}");
    }
}

#[test]
fn binomial_mean_variance() {
    let b = Binomial::new(20, 0.3_f64).unwrap();
    assert!((b.mean() - 6.0).abs() < 1e-14);
    assert!((b.variance() - 4.2).abs() < 1e-14);
}

#[test]
fn binomial_invalid() {
    assert!(Binomial::new(10, -0.1_f64).is_err());
    assert!(Binomial::new(10, 1.1_f64).is_err());
}

// ======================== NegativeBinomial ========================

#[test]
fn negative_binomial_pmf_sum() {
    let nb = NegativeBinomial::new(3.0_f64, 0.4).unwrap();
    let mut sum = 0.0;
    for k in 0..30 {
        sum += nb.pmf(k);
        assert!((nb.cdf(k) - sum).abs() < 1e-13, "k = {k}");
    }
    assert!((nb.cdf(4) - nbdtr(4, 3, 0.4)).abs() < 1e-15);
    assert!((nb.sf(4) - nbdtrc(4, 3, 0.4)).abs() < 1e-15);
}

#[test]
fn negative_binomial_real_r() {
    let nb = NegativeBinomial::new(2.5_f64, 0.6).unwrap();
    assert!((nb.cdf(3) + nb.sf(3) - 1.0).abs() < 1e-15);
    assert!((nb.mean() - 2.5 * 0.4 / 0.6).abs() < 1e-14);
}

#[test]
fn negative_binomial_invalid() {
    assert!(NegativeBinomial::new(0.0_f64, 0.5).is_err());
    assert!(NegativeBinomial::new(2.0_f64, 0.0).is_err());
    assert!(NegativeBinomial::new(2.0_f64, 1.0).is_ok());
}

// ======================== Poisson ========================

#[test]
fn poisson_pmf() {
    let p = Poisson::new(2.0_f64).unwrap();
    // P(X=0) = e⁻², P(X=3) = 8e⁻²/6
    let e2 = (-2.0f64).exp();
    assert!((p.pmf(0) - e2).abs() < 1e-15);
    assert!((p.pmf(3) - 8.0 * e2 / 6.0).abs() < 1e-15);
}

#[test]
fn poisson_cdf() {
    let p = Poisson::new(2.5_f64).unwrap();
    assert!((p.cdf(3) - 0.75757613313306596).abs() < 1e-14);
    assert!((p.sf(3) - 0.24242386686693404).abs() < 1e-14);
    let mut sum = 0.0;
    for k in 0..10 {
        sum += p.pmf(k);
        assert!((p.cdf(k) - sum).abs() < 1e-14, "k = {k}");
    }
}

#[test]
fn poisson_mean_variance() {
    let p = Poisson::new(4.5_f64).unwrap();
    assert!((p.mean() - 4.5).abs() < 1e-14);
    assert!((p.variance() - 4.5).abs() < 1e-14);
}

#[test]
fn poisson_invalid() {
    assert!(Poisson::new(0.0_f64).is_err());
    assert!(Poisson::new(-1.0_f64).is_err());
}

// ======================== Cross-distribution ========================

#[test]
fn chi_squared_gamma_equivalence() {
    // χ²(k) = Gamma(k/2, ½)
    let c = ChiSquared::new(6.0_f64).unwrap();
    let g = Gamma::new(3.0_f64, 0.5).unwrap();
    for &x in &[0.5, 2.0, 6.0, 15.0] {
        assert!((c.cdf(x) - g.cdf(x)).abs() < 1e-14);
        assert!((c.pdf(x) - g.pdf(x)).abs() < 1e-14);
    }
}

#[test]
fn poisson_gamma_duality() {
    // P(Poisson(λ) ≤ k) = P(Gamma(k+1, 1) > λ)
    let lambda = 3.7;
    let p = Poisson::new(lambda).unwrap();
    for k in 0..8u64 {
        let g = Gamma::new(k as f64 + 1.0, 1.0).unwrap();
        assert!((p.cdf(k) - g.sf(lambda)).abs() < 1e-14);
    }
}

#[test]
fn binomial_beta_duality() {
    // P(B(n,p) ≤ k) = P(Beta(k+1, n−k) > p)
    let b = Binomial::new(12, 0.35_f64).unwrap();
    for k in 0..12u64 {
        let beta = Beta::new(k as f64 + 1.0, 12.0 - k as f64).unwrap();
        assert!((b.cdf(k) - beta.sf(0.35)).abs() < 1e-13, "k = {k}");
    }
}

#[test]
fn f32_storage_paths() {
    let g = Gamma::new(2.0_f32, 1.0).unwrap();
    assert!((g.cdf(1.0) - 0.26424112).abs() < 1e-6);
    let b = Binomial::new(10, 0.5_f32).unwrap();
    assert!((b.cdf(2) - 0.0546875).abs() < 1e-7);
    let t = StudentT::new(4.0_f32).unwrap();
    assert!((t.cdf(1.5) - 0.896).abs() < 1e-6);
}

// ======================== Error display ========================

#[cfg(feature = "alloc")]
#[test]
fn error_display() {
    use core::fmt::Write;
    let mut s = alloc::string::String::new();
    write!(s, "{}", StatsError::InvalidParameter).unwrap();
    assert!(s.contains("out of valid range"));
}
