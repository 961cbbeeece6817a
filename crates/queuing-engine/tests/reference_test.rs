use queuing_engine::{QueuingError, QueuingModel, QueuingRequest, evaluate};

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[test]
fn mm1_matches_reference_table() {
    let r = evaluate(2.0, 3.0, 1).unwrap();

    assert_eq!(r.model, QueuingModel::SingleServer);
    assert_eq!(round4(r.rho), 0.6667);
    assert_eq!(round4(r.p0), 0.3333);
    assert_eq!(round4(r.l), 2.0);
    assert_eq!(round4(r.lq), 1.3333);
    assert_eq!(round4(r.w), 1.0);
    assert_eq!(round4(r.wq), 0.6667);
    assert_eq!(round4(r.pw), 0.6667);
}

#[test]
fn mm1_at_capacity_is_unstable() {
    match evaluate(3.0, 3.0, 1) {
        Err(QueuingError::Unstable { server_count, .. }) => assert_eq!(server_count, 1),
        other => panic!("expected instability, got {other:?}"),
    }
}

#[test]
fn mm2_satisfies_littles_law() {
    let (lambda, mu) = (4.0, 3.0);
    let r = evaluate(lambda, mu, 2).unwrap();

    assert_eq!(r.model.to_string(), "M/M/2");
    assert_eq!(round4(r.rho), 0.6667);
    assert!((r.l - (r.lq + lambda / mu)).abs() < 1e-12);
    assert!((r.w - (r.wq + 1.0 / mu)).abs() < 1e-12);
    assert!((r.wq - r.lq / lambda).abs() < 1e-12);
    assert!(r.p0 > 0.0 && r.p0 <= 1.0);
    assert!(r.pw > 0.0 && r.pw < 1.0);
}

#[test]
fn mmc_beyond_capacity_is_unstable() {
    let err = evaluate(10.0, 3.0, 3).unwrap_err();
    assert!(err.is_unstable());
    assert_eq!(err.to_string(), "Unstable system (λ ≥ 3μ)");
}

#[test]
fn metrics_grow_with_arrival_rate() {
    // μ = 3; λ walks toward cμ without reaching it
    for (servers, lambdas) in [
        (1, vec![0.5, 1.5, 2.5, 2.9]),
        (2, vec![2.0, 4.0, 5.0, 5.9]),
        (3, vec![1.0, 4.0, 7.0, 8.5]),
    ] {
        let results: Vec<_> = lambdas
            .iter()
            .map(|&lambda| evaluate(lambda, 3.0, servers).unwrap())
            .collect();

        for pair in results.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            assert!(hi.lq > lo.lq, "Lq should grow (c = {servers})");
            assert!(hi.l > lo.l, "L should grow (c = {servers})");
            assert!(hi.wq > lo.wq, "Wq should grow (c = {servers})");
            assert!(hi.w > lo.w, "W should grow (c = {servers})");
            assert!(hi.p0 < lo.p0, "P0 should shrink (c = {servers})");
        }
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let request = QueuingRequest::new(4.0, 3.0).with_servers(2);
    let first = request.evaluate().unwrap();

    for _ in 0..10 {
        let again = request.evaluate().unwrap();
        assert_eq!(again.p0.to_bits(), first.p0.to_bits());
        assert_eq!(again.l.to_bits(), first.l.to_bits());
        assert_eq!(again.lq.to_bits(), first.lq.to_bits());
        assert_eq!(again.w.to_bits(), first.w.to_bits());
        assert_eq!(again.wq.to_bits(), first.wq.to_bits());
        assert_eq!(again.pw.to_bits(), first.pw.to_bits());
        assert_eq!(again.rho.to_bits(), first.rho.to_bits());
    }
}

#[test]
fn evaluation_is_thread_safe() {
    let expected = evaluate(7.0, 3.0, 3).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| evaluate(7.0, 3.0, 3).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
