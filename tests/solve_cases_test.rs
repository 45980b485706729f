use anyhow::Result;
use approx::assert_abs_diff_eq;
use trisolve::{solve, CaseKind, SolveError, TriangleSpec, Vertex};

#[test]
fn test_sss_right_triangle() -> Result<()> {
    let solved = solve(Some(3.0), Some(4.0), Some(5.0), None, None, None)?;

    assert_eq!(solved.case, CaseKind::Sss);
    // The right angle faces the longest side.
    assert_abs_diff_eq!(solved.angle(Vertex::A), 36.8699, epsilon = 1e-4);
    assert_abs_diff_eq!(solved.angle(Vertex::B), 53.1301, epsilon = 1e-4);
    assert_abs_diff_eq!(solved.angle(Vertex::C), 90.0, epsilon = 1e-4);
    assert_eq!(solved.sides, [3.0, 4.0, 5.0]);
    Ok(())
}

#[test]
fn test_sss_scalene() -> Result<()> {
    let solved = solve(Some(8.0), Some(10.0), Some(12.0), None, None, None)?;
    assert_abs_diff_eq!(solved.angle(Vertex::A), 41.4096, epsilon = 1e-4);
    assert_abs_diff_eq!(solved.angle(Vertex::B), 55.7711, epsilon = 1e-4);
    assert_abs_diff_eq!(solved.angle(Vertex::C), 82.8192, epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_sas_included_angle_c() -> Result<()> {
    let solved = solve(Some(5.0), Some(7.0), None, None, None, Some(60.0))?;

    assert_eq!(solved.case, CaseKind::Sas);
    assert_abs_diff_eq!(solved.c(), 6.2450, epsilon = 1e-4);
    assert_abs_diff_eq!(solved.angle(Vertex::A), 43.8979, epsilon = 1e-4);
    assert_abs_diff_eq!(solved.angle(Vertex::B), 76.1021, epsilon = 1e-4);
    assert_eq!(solved.angle(Vertex::C), 60.0);
    Ok(())
}

#[test]
fn test_sas_all_three_permutations_agree() -> Result<()> {
    // The same triangle entered through each included angle.
    let by_c = solve(Some(5.0), Some(7.0), None, None, None, Some(60.0))?;
    let by_b = solve(Some(7.0), None, Some(5.0), None, Some(60.0), None)?;
    let by_a = solve(None, Some(5.0), Some(7.0), Some(60.0), None, None)?;

    assert_abs_diff_eq!(by_c.c(), by_b.b(), epsilon = 1e-12);
    assert_abs_diff_eq!(by_c.c(), by_a.a(), epsilon = 1e-12);
    for solved in [&by_c, &by_b, &by_a] {
        assert_abs_diff_eq!(solved.angles.iter().sum::<f64>(), 180.0, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_asa_from_side_c() -> Result<()> {
    let solved = solve(None, None, Some(10.0), Some(30.0), Some(60.0), None)?;

    assert_eq!(solved.case, CaseKind::Asa);
    assert_abs_diff_eq!(solved.angle(Vertex::C), 90.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solved.a(), 5.0, epsilon = 1e-4);
    assert_abs_diff_eq!(solved.b(), 8.6603, epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_aas_from_side_b() -> Result<()> {
    let solved = solve(None, Some(8.660_254_037_844_386), None, None, Some(60.0), Some(90.0))?;
    assert_eq!(solved.case, CaseKind::Aas);
    assert_abs_diff_eq!(solved.angle(Vertex::A), 30.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solved.a(), 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solved.c(), 10.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_degenerate_sides_are_invalid() {
    let err = solve(Some(1.0), Some(1.0), Some(3.0), None, None, None).unwrap_err();
    assert!(matches!(err, SolveError::InvalidTriangle { .. }));
    assert!(err.to_string().contains("triangle inequality"));

    let err = solve(Some(1.0), Some(2.0), Some(3.0), None, None, None).unwrap_err();
    assert!(matches!(err, SolveError::InvalidTriangle { .. }));
}

#[test]
fn test_one_side_one_angle_is_insufficient() {
    let err = solve(Some(3.0), None, None, None, Some(40.0), None).unwrap_err();
    assert!(matches!(err, SolveError::InsufficientInput { .. }));
    assert!(err.to_string().contains("One side and two angles (ASA/AAS)"));
}

#[test]
fn test_ssa_is_insufficient_for_every_pairing() {
    let ssa = [
        TriangleSpec::new(Some(5.0), Some(7.0), None, Some(30.0), None, None),
        TriangleSpec::new(Some(5.0), Some(7.0), None, None, Some(30.0), None),
        TriangleSpec::new(Some(5.0), None, Some(7.0), None, None, Some(30.0)),
        TriangleSpec::new(None, Some(5.0), Some(7.0), None, Some(30.0), None),
    ];
    for spec in ssa {
        let err = trisolve::solve_spec(&spec).unwrap_err();
        assert!(
            matches!(err, SolveError::InsufficientInput { .. }),
            "{:?} gave {:?}",
            spec,
            err
        );
    }
}

#[test]
fn test_over_specified_is_insufficient() {
    let err = solve(Some(3.0), Some(4.0), Some(5.0), Some(36.87), Some(53.13), Some(90.0)).unwrap_err();
    assert!(matches!(err, SolveError::InsufficientInput { .. }));
}

#[test]
fn test_angle_domain() {
    let err = solve(None, None, Some(10.0), Some(180.0), Some(10.0), None).unwrap_err();
    assert!(matches!(err, SolveError::DomainError { .. }));

    let err = solve(None, None, Some(10.0), Some(120.0), Some(70.0), None).unwrap_err();
    assert!(matches!(err, SolveError::InvalidTriangle { .. }));
}

#[test]
fn test_trace_is_ordered_by_derivation() -> Result<()> {
    let solved = solve(Some(5.0), Some(7.0), None, None, None, Some(60.0))?;
    let rendered: Vec<String> = solved.trace.iter().map(|s| s.substituted(4)).collect();
    assert_eq!(
        rendered,
        vec![
            "c = √(5.0000² + 7.0000² − 2·5.0000·7.0000·cos(60.0000°))".to_string(),
            "A = acos((7.0000² + 6.2450² − 5.0000²) / (2·7.0000·6.2450))".to_string(),
            "B = 180° − 60.0000° − 43.8979°".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_raw_fields() -> Result<()> {
    let spec = TriangleSpec::from_raw(["3", "4", " 5 ", "", "", ""])?;
    let solved = trisolve::solve_spec(&spec)?;
    assert_eq!(solved.case, CaseKind::Sss);

    let err = TriangleSpec::from_raw(["3", "four", "5", "", "", ""]).unwrap_err();
    assert!(err.to_string().contains("side b"));
    Ok(())
}
