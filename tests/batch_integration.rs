use food_i2v::batch::{BatchOutcome, RunSummary, run_batch};
use food_i2v::config::Config;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_in(root: &Path, launcher: Vec<String>) -> Config {
    Config {
        images_dir: root.join("images"),
        output_dir: root.join("outputs"),
        launcher,
        ..Config::default()
    }
}

fn touch_images(root: &Path, names: &[&str]) {
    let dir = root.join("images");
    fs::create_dir_all(&dir).unwrap();
    for name in names {
        fs::write(dir.join(name), b"img").unwrap();
    }
}

#[cfg(unix)]
mod with_fake_generator {
    use super::*;
    use food_i2v::config::FOOD_CAMERA_PROMPT;
    use std::path::PathBuf;

    /// Stand-in generator: logs its argv (one arg per line, `---` after each
    /// call) and then runs `tail`.
    fn fake_generator(root: &Path, tail: &str) -> (Vec<String>, PathBuf) {
        let log = root.join("calls.log");
        let script = root.join("generate.sh");
        fs::write(
            &script,
            format!(
                "printf '%s\\n' \"$@\" >> '{log}'\necho --- >> '{log}'\n{tail}\n",
                log = log.display(),
                tail = tail
            ),
        )
        .unwrap();
        (vec!["sh".to_string(), script.display().to_string()], log)
    }

    fn recorded_calls(log: &Path) -> Vec<Vec<String>> {
        let text = fs::read_to_string(log).unwrap_or_default();
        text.split("---\n")
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| chunk.lines().map(str::to_string).collect())
            .collect()
    }

    fn value_after<'a>(call: &'a [String], flag: &str) -> &'a str {
        let idx = call.iter().position(|a| a == flag).unwrap();
        &call[idx + 1]
    }

    #[tokio::test]
    async fn two_images_all_succeed() {
        let root = TempDir::new().unwrap();
        touch_images(root.path(), &["a.png", "b.jpg"]);
        let (launcher, log) = fake_generator(root.path(), "exit 0");
        let cfg = config_in(root.path(), launcher);

        let outcome = run_batch(&cfg).await.unwrap();

        assert_eq!(
            outcome,
            BatchOutcome::Completed(RunSummary {
                total: 2,
                successful: 2,
                failed: 0
            })
        );

        let calls = recorded_calls(&log);
        assert_eq!(calls.len(), 2);
        let mut saved: Vec<String> = calls
            .iter()
            .map(|c| value_after(c, "--save_file").to_string())
            .collect();
        saved.sort();
        let outputs = root.path().join("outputs");
        assert_eq!(
            saved,
            vec![
                outputs.join("a_food_motion.mp4").display().to_string(),
                outputs.join("b_food_motion.mp4").display().to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn single_failing_image_is_counted() {
        let root = TempDir::new().unwrap();
        touch_images(root.path(), &["a.png"]);
        let (launcher, log) = fake_generator(root.path(), "exit 1");
        let cfg = config_in(root.path(), launcher);

        let outcome = run_batch(&cfg).await.unwrap();

        assert_eq!(
            outcome,
            BatchOutcome::Completed(RunSummary {
                total: 1,
                successful: 0,
                failed: 1
            })
        );
        assert_eq!(recorded_calls(&log).len(), 1);
    }

    #[tokio::test]
    async fn failures_do_not_stop_the_batch() {
        let root = TempDir::new().unwrap();
        touch_images(root.path(), &["a.png", "b.jpg", "c.JPG", "d.jpeg"]);
        let (launcher, log) = fake_generator(
            root.path(),
            "case \"$*\" in *b.jpg*|*d.jpeg*) exit 3;; esac\nexit 0",
        );
        let cfg = config_in(root.path(), launcher);

        let outcome = run_batch(&cfg).await.unwrap();

        assert_eq!(
            outcome,
            BatchOutcome::Completed(RunSummary {
                total: 4,
                successful: 2,
                failed: 2
            })
        );
        assert_eq!(recorded_calls(&log).len(), 4);
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn non_utf8_image_reaches_generator_intact() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = TempDir::new().unwrap();
        touch_images(root.path(), &[]);
        let image = root.path().join("images").join(OsStr::from_bytes(b"caf\xe9.jpg"));
        fs::write(&image, b"img").unwrap();

        // Succeeds only if the `--image` value names a file that exists.
        let (launcher, _log) = fake_generator(
            root.path(),
            "while [ $# -gt 0 ]; do\n  if [ \"$1\" = --image ]; then [ -f \"$2\" ] || exit 9; fi\n  shift\ndone\nexit 0",
        );
        let cfg = config_in(root.path(), launcher);

        let outcome = run_batch(&cfg).await.unwrap();

        assert_eq!(
            outcome,
            BatchOutcome::Completed(RunSummary {
                total: 1,
                successful: 1,
                failed: 0
            })
        );
    }

    #[tokio::test]
    async fn every_call_carries_the_same_parameters() {
        let root = TempDir::new().unwrap();
        touch_images(root.path(), &["a.png", "b.jpg", "c.PNG"]);
        let (launcher, log) = fake_generator(root.path(), "exit 0");
        let cfg = config_in(root.path(), launcher);

        run_batch(&cfg).await.unwrap();

        let calls = recorded_calls(&log);
        assert_eq!(calls.len(), 3);
        for call in &calls {
            assert_eq!(value_after(call, "--task"), "i2v-A14B");
            assert_eq!(value_after(call, "--prompt"), FOOD_CAMERA_PROMPT);
            assert_eq!(value_after(call, "--size"), "720*1280");
            assert_eq!(value_after(call, "--frame_num"), "81");
            assert_eq!(value_after(call, "--sample_steps"), "40");
            assert_eq!(value_after(call, "--sample_shift"), "5.0");
            assert_eq!(value_after(call, "--sample_guide_scale"), "5.0");
            assert_eq!(value_after(call, "--offload_model"), "True");
        }
    }
}

#[tokio::test]
async fn missing_input_dir_runs_nothing() {
    let root = TempDir::new().unwrap();
    let cfg = config_in(root.path(), vec!["no-such-generator-binary".to_string()]);

    let outcome = run_batch(&cfg).await.unwrap();

    assert_eq!(outcome, BatchOutcome::MissingInput);
    assert!(root.path().join("outputs").is_dir());
}

#[tokio::test]
async fn empty_input_dir_runs_nothing() {
    let root = TempDir::new().unwrap();
    touch_images(root.path(), &["readme.txt", "photo.Png"]);
    let cfg = config_in(root.path(), vec!["no-such-generator-binary".to_string()]);

    assert_eq!(run_batch(&cfg).await.unwrap(), BatchOutcome::NoImages);
}

#[tokio::test]
async fn unstartable_generator_fails_every_job_without_aborting() {
    let root = TempDir::new().unwrap();
    touch_images(root.path(), &["a.png", "b.jpg", "c.jpeg"]);
    let cfg = config_in(root.path(), vec!["no-such-generator-binary".to_string()]);

    let outcome = run_batch(&cfg).await.unwrap();

    assert_eq!(
        outcome,
        BatchOutcome::Completed(RunSummary {
            total: 3,
            successful: 0,
            failed: 3
        })
    );
}
