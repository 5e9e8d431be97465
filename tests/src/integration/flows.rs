//! # Latest-Wins Flows
//!
//! Orchestrator, registry and CPU engine wired together without HTTP.
//!
//! ```text
//! request A (client X) ──admit──→ [registry X → A] ──compute──┐
//! request B (client X) ──admit──→ cancel A, [registry X → B]  │
//!                                                             ↓
//!                                       A: Cancelled, B: Completed
//! ```

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use lw_03_job_orchestrator::{HistoryPage, JobApi, JobConfig, JobOutcome};
    use shared_types::{ClientKey, Matrix};

    use crate::integration::{orchestrator, orchestrator_with, wait_for_active};

    const JOB_TIMEOUT: Duration = Duration::from_secs(60);

    // =========================================================================
    // SUPERSESSION
    // =========================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_follow_up_cancels_running_compute() {
        let jobs = orchestrator_with(JobConfig {
            max_size: 3000,
            ..Default::default()
        });

        let slow = {
            let jobs = Arc::clone(&jobs);
            tokio::spawn(async move { jobs.run_job("10.1.1.1:4000", Some("1500")).await })
        };
        wait_for_active(jobs.as_ref(), 1).await;

        let fast = tokio::time::timeout(JOB_TIMEOUT, jobs.run_job("10.1.1.1:4001", Some("4")))
            .await
            .unwrap();
        let slow = tokio::time::timeout(JOB_TIMEOUT, slow)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(slow, JobOutcome::Cancelled);
        assert_eq!(fast.report().map(|r| r.size), Some(4));
        assert_eq!(jobs.status().jobs.superseded, 1);
        wait_for_active(jobs.as_ref(), 0).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_chain_of_requests_only_last_survives() {
        let jobs = orchestrator();

        let first = {
            let jobs = Arc::clone(&jobs);
            tokio::spawn(async move { jobs.run_job("10.2.2.2", Some("2001")).await })
        };
        wait_for_active(jobs.as_ref(), 1).await;

        let second = {
            let jobs = Arc::clone(&jobs);
            tokio::spawn(async move { jobs.run_job("10.2.2.2", Some("99999")).await })
        };
        let first = tokio::time::timeout(JOB_TIMEOUT, first)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first, JobOutcome::RejectedOversize);
        wait_for_active(jobs.as_ref(), 1).await;

        let third = jobs.run_job("10.2.2.2", Some("3")).await;
        let second = tokio::time::timeout(JOB_TIMEOUT, second)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(second, JobOutcome::RejectedOversize);
        assert!(third.is_completed());
        assert_eq!(
            second.to_string(),
            "Request was cancelled due to large number\n"
        );

        let stats = jobs.status().jobs;
        assert_eq!(stats.accepted, 3);
        assert_eq!(stats.rejected_oversize, 2);
        assert_eq!(stats.completed, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_clients_do_not_interfere() {
        let jobs = orchestrator();

        let parked = {
            let jobs = Arc::clone(&jobs);
            tokio::spawn(async move { jobs.run_job("10.3.3.3", Some("5000")).await })
        };
        wait_for_active(jobs.as_ref(), 1).await;

        let others: Vec<_> = (1..=4)
            .map(|i| {
                let jobs = Arc::clone(&jobs);
                tokio::spawn(async move { jobs.run_job(&format!("10.4.4.{i}"), Some("8")).await })
            })
            .collect();
        for other in others {
            assert!(other.await.unwrap().is_completed());
        }

        assert!(!parked.is_finished());
        assert_eq!(jobs.status().active_jobs, 1);

        assert_eq!(jobs.shutdown(), 1);
        let parked = tokio::time::timeout(JOB_TIMEOUT, parked)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(parked, JobOutcome::RejectedOversize);
    }

    // =========================================================================
    // RESULT CORRECTNESS
    // =========================================================================

    #[tokio::test]
    async fn test_completed_report_is_a_product() {
        let jobs = orchestrator();
        let outcome = jobs.run_job("10.5.5.5", Some("6")).await;

        let report = outcome.report().unwrap();
        assert_eq!(report.size, 6);
        assert_eq!(report.matrix.size(), 6);

        let text = outcome.to_string();
        let mut lines = text.lines();
        assert!(lines
            .next()
            .unwrap()
            .starts_with("Matrix multiplication (size: 6) completed in "));
        assert_eq!(lines.next(), Some("Resulting Matrix:"));
        for (row, line) in lines.enumerate() {
            assert_eq!(line, report.matrix.render_row(row));
        }
    }

    #[tokio::test]
    async fn test_identity_product_through_engine() {
        use lw_02_matrix_compute::backends::cpu::CpuEngine;
        use lw_02_matrix_compute::MatrixEngine;
        use tokio_util::sync::CancellationToken;

        let n = 5;
        let identity = Matrix::from_rows(
            (0..n)
                .map(|i| (0..n).map(|j| i64::from(i == j)).collect())
                .collect(),
        )
        .unwrap();
        let values = Matrix::from_rows(
            (0..n)
                .map(|i| (0..n).map(|j| (i * n + j) as i64).collect())
                .collect(),
        )
        .unwrap();

        let product = CpuEngine::new()
            .multiply(
                Arc::new(values.clone()),
                Arc::new(identity),
                CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(product.is_complete());
        assert_eq!(product.matrix, values);
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_abandoned_request_releases_registry() {
        let jobs = orchestrator();

        let abandoned = {
            let jobs = Arc::clone(&jobs);
            tokio::spawn(async move { jobs.run_job("10.6.6.6", Some("2500")).await })
        };
        wait_for_active(jobs.as_ref(), 1).await;

        abandoned.abort();
        wait_for_active(jobs.as_ref(), 0).await;

        let registry = jobs.status().registry;
        assert_eq!(registry.registered, 1);
        assert_eq!(registry.released, 1);

        // The next request from the same client starts cleanly.
        let next = jobs.run_job("10.6.6.6", Some("2")).await;
        assert!(next.is_completed());
        assert_eq!(jobs.status().jobs.superseded, 0);
    }

    #[tokio::test]
    async fn test_history_tracks_computed_requests_only() {
        let jobs = orchestrator();
        let key = ClientKey::new("10.7.7.7");

        jobs.run_job_for_key(key.clone(), Some("2")).await;
        jobs.run_job_for_key(key.clone(), Some("abc")).await;
        jobs.run_job_for_key(ClientKey::new("10.8.8.8"), Some("3")).await;

        let oversize = {
            let jobs = Arc::clone(&jobs);
            let key = key.clone();
            tokio::spawn(async move { jobs.run_job_for_key(key, Some("2001")).await })
        };
        wait_for_active(jobs.as_ref(), 1).await;
        jobs.shutdown();
        oversize.await.unwrap();

        let records = jobs
            .history(
                &key,
                HistoryPage {
                    page: 1,
                    page_size: 10,
                },
            )
            .unwrap();
        let sizes: Vec<usize> = records.iter().map(|r| r.matrix_size).collect();
        assert_eq!(sizes, vec![2, 100]);
        assert!(records.windows(2).all(|w| w[0].id < w[1].id));
        assert!(records.iter().all(|r| r.client_key == key));
    }
}
