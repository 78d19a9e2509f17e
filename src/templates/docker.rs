//! Container image build and registry templates

use super::common;
use crate::workflow::OptionSet;

/// Smoke-test step shared by the registry flows: a throwaway build of the
/// image's `test` target.
const DOCKER_TEST_STEP: &str = "      - name: Run tests
        run: docker build --target test -t test-image .
";

pub(super) fn azure_acr(options: &OptionSet) -> String {
    let mut doc = String::from("name: Build and Push to Azure Container Registry\n\n");
    doc.push_str(common::ON_PUSH_DISPATCH);
    doc.push_str(
        "env:
  REGISTRY_NAME: 'your-registry'
  IMAGE_NAME: 'your-image'

jobs:
  build-and-push:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT_NAMED);
    doc.push('\n');
    doc.push_str(common::AZURE_LOGIN);
    doc.push('\n');
    doc.push_str(
        "      - name: Login to ACR
        run: az acr login --name ${{ env.REGISTRY_NAME }}
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(DOCKER_TEST_STEP);
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Build and push image
        run: |
          docker build -t ${{ env.REGISTRY_NAME }}.azurecr.io/${{ env.IMAGE_NAME }}:${{ github.sha }} .
          docker push ${{ env.REGISTRY_NAME }}.azurecr.io/${{ env.IMAGE_NAME }}:${{ github.sha }}
          docker tag ${{ env.REGISTRY_NAME }}.azurecr.io/${{ env.IMAGE_NAME }}:${{ github.sha }} \\
            ${{ env.REGISTRY_NAME }}.azurecr.io/${{ env.IMAGE_NAME }}:latest
          docker push ${{ env.REGISTRY_NAME }}.azurecr.io/${{ env.IMAGE_NAME }}:latest
",
    );
    doc.push('\n');
    doc.push_str(common::AZURE_LOGOUT);
    doc
}

pub(super) fn azure_containerapp(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy to Azure Container Apps\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str(
        "env:
  CONTAINER_APP_NAME: 'your-app'
  RESOURCE_GROUP: 'your-rg'
  REGISTRY_NAME: 'your-registry'
  IMAGE_NAME: 'your-image'

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(common::AZURE_LOGIN);
    doc.push('\n');
    doc.push_str(
        "      - name: Build and push to ACR
        run: |
          az acr build --registry ${{ env.REGISTRY_NAME }} \\
            --image ${{ env.IMAGE_NAME }}:${{ github.sha }} .
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to Container App
        run: |
          az containerapp update \\
            --name ${{ env.CONTAINER_APP_NAME }} \\
            --resource-group ${{ env.RESOURCE_GROUP }} \\
            --image ${{ env.REGISTRY_NAME }}.azurecr.io/${{ env.IMAGE_NAME }}:${{ github.sha }}
",
    );
    doc
}

pub(super) fn aws_ecr(options: &OptionSet) -> String {
    let mut doc = String::from("name: Build and Push to AWS ECR\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str(
        "env:
  AWS_REGION: us-east-1
  ECR_REPOSITORY: your-repo
  IMAGE_TAG: ${{ github.sha }}

jobs:
  build-and-push:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT_NAMED);
    doc.push('\n');
    doc.push_str(common::CONFIGURE_AWS_CREDENTIALS);
    doc.push('\n');
    doc.push_str(common::ECR_LOGIN);
    if options.tests {
        doc.push('\n');
        doc.push_str(DOCKER_TEST_STEP);
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Build, tag, and push image to Amazon ECR
        env:
          ECR_REGISTRY: ${{ steps.login-ecr.outputs.registry }}
        run: |
          docker build -t $ECR_REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG .
          docker push $ECR_REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG
          docker tag $ECR_REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG $ECR_REGISTRY/$ECR_REPOSITORY:latest
          docker push $ECR_REGISTRY/$ECR_REPOSITORY:latest
",
    );
    doc
}

pub(super) fn aws_ecs(_options: &OptionSet) -> String {
    let mut doc = String::from("name: Deploy to AWS ECS\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str(
        "env:
  AWS_REGION: us-east-1
  ECR_REPOSITORY: your-repo
  ECS_SERVICE: your-service
  ECS_CLUSTER: your-cluster
  CONTAINER_NAME: your-container

jobs:
  deploy:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT);
    doc.push('\n');
    doc.push_str(common::CONFIGURE_AWS_CREDENTIALS);
    doc.push('\n');
    doc.push_str(common::ECR_LOGIN);
    doc.push('\n');
    doc.push_str(
        "      - name: Build and push image
        id: build-image
        env:
          ECR_REGISTRY: ${{ steps.login-ecr.outputs.registry }}
          IMAGE_TAG: ${{ github.sha }}
        run: |
          docker build -t $ECR_REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG .
          docker push $ECR_REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG
          echo \"image=$ECR_REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG\" >> $GITHUB_OUTPUT
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Deploy to ECS
        run: |
          aws ecs update-service \\
            --cluster ${{ env.ECS_CLUSTER }} \\
            --service ${{ env.ECS_SERVICE }} \\
            --force-new-deployment
",
    );
    doc
}

pub(super) fn dockerhub_build(options: &OptionSet) -> String {
    let mut doc = String::from("name: Build and Push to Docker Hub\n\n");
    doc.push_str(common::ON_PUSH);
    doc.push_str(
        "env:
  IMAGE_NAME: your-username/your-image

jobs:
  build-and-push:
    runs-on: ubuntu-latest

    steps:
",
    );
    doc.push_str(common::CHECKOUT_NAMED);
    doc.push('\n');
    doc.push_str(
        "      - name: Set up Docker Buildx
        uses: docker/setup-buildx-action@v3
",
    );
    doc.push('\n');
    doc.push_str(
        "      - name: Login to Docker Hub
        uses: docker/login-action@v3
        with:
          username: ${{ secrets.DOCKERHUB_USERNAME }}
          password: ${{ secrets.DOCKERHUB_TOKEN }}
",
    );
    if options.tests {
        doc.push('\n');
        doc.push_str(DOCKER_TEST_STEP);
    }
    doc.push('\n');
    doc.push_str(
        "      - name: Build and push
        uses: docker/build-push-action@v5
        with:
          context: .
          push: true
          tags: |
            ${{ env.IMAGE_NAME }}:${{ github.sha }}
            ${{ env.IMAGE_NAME }}:latest
",
    );
    if options.cache {
        doc.push_str("          cache-from: type=gha\n");
        doc.push_str("          cache-to: type=gha,mode=max\n");
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acr_tags_sha_and_latest() {
        let doc = azure_acr(&OptionSet::disabled());
        assert!(doc.contains(":${{ github.sha }} ."));
        assert!(doc.contains(":latest"));
        assert!(doc.contains("az acr login --name ${{ env.REGISTRY_NAME }}"));
    }

    #[test]
    fn test_registry_flows_gate_test_build() {
        for render in [azure_acr, aws_ecr, dockerhub_build] {
            let with_tests = render(&OptionSet::disabled().with_tests(true));
            assert!(with_tests.contains("docker build --target test -t test-image ."));

            let without = render(&OptionSet::disabled());
            assert!(!without.contains("--target test"));
        }
    }

    #[test]
    fn test_dockerhub_cache_adds_gha_backend() {
        let cached = dockerhub_build(&OptionSet::disabled().with_cache(true));
        assert!(cached.contains("cache-from: type=gha"));
        assert!(cached.contains("cache-to: type=gha,mode=max"));

        let uncached = dockerhub_build(&OptionSet::disabled());
        assert!(!uncached.contains("cache-from"));
    }

    #[test]
    fn test_ecs_forces_new_deployment() {
        let doc = aws_ecs(&OptionSet::enabled());
        assert!(doc.contains("aws ecs update-service"));
        assert!(doc.contains("--force-new-deployment"));
        assert!(doc.contains("$GITHUB_OUTPUT"));
    }
}
